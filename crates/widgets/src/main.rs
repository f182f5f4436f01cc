//! # Widgets CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/widgets/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging + context wiring (commands.rs)                   │
//! │  - Per-command handlers (handlers.rs)                       │
//! │  - Terminal rendering via console styles (render.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/widgetapp/src/api.rs)                    │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command + Store Layers (crates/widgetapp/src/...)          │
//! │  - Business logic, sanitization, backup, recovery           │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, logging setup, context initialization, dispatch, error handling,
//! and rendering.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each command and store module, plus
//!   integration tests over the filesystem backend.
//! - **CLI**: rendering is tested with canned `CmdResult` values; end-to-end
//!   tests drive the binary with `assert_cmd` against a temp data directory.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
