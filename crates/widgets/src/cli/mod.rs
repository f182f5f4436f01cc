//! # CLI Behavior
//!
//! This is **one possible UI client** for widgetapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Naked Execution (`widgets`)
//!
//! Running `widgets` with no arguments defaults to `widgets list`.
//!
//! ## Content From Stdin
//!
//! `add` and `update` take their content from the trailing words when given,
//! otherwise from stdin:
//!
//! - `widgets add buy milk`
//! - `echo "buy milk" | widgets add`
//! - `widgets update <id> < notes.txt`
//!
//! Stdin for `update` is read as raw bytes, so non-UTF-8 input is rejected
//! with `INVALID_CONTENT` instead of being mangled.
//!
//! ## Live Editing
//!
//! `widgets edit <id>` reads lines from stdin. Each line is the widget's full
//! new content; writes are debounced (`WIDGETS_DEBOUNCE_MS`, default 500 ms)
//! so a fast stream of lines causes one write.
//!
//! ## Exit Status
//!
//! Messages at error level are printed to stderr and the process exits with
//! status 1. Store errors are reported with their code; recoverable ones
//! (storage unavailable, quota, failed writes) add a hint to try again.
//!
//! ## Module Structure
//!
//! - `commands`: Entry point, logging and context setup, dispatch
//! - `handlers`: Per-command handlers that call the API
//! - `render`: Output formatting (lists, full widgets, messages, JSON)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod handlers;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
