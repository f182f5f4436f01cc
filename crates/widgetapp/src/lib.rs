//! # widgetapp
//!
//! A local store for short text widgets: notes identified by a string id,
//! carrying creation and update timestamps. Every write is sanitized and
//! size-checked, and a backup record is written before the primary copy so a
//! corrupted collection can be recovered.
//!
//! ## Architecture
//!
//! The crate is layered, UI on top and storage at the bottom:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ UI (widgets CLI, tests)      │  formats output, owns I/O
//! ├──────────────────────────────┤
//! │ api::WidgetsApi              │  thin facade, dispatch only
//! ├──────────────────────────────┤
//! │ commands::*                  │  business logic, returns CmdResult
//! ├──────────────────────────────┤
//! │ store::DataStore             │  widget collection semantics
//! ├──────────────────────────────┤
//! │ store::backend::StorageBackend│  raw key-value medium
//! └──────────────────────────────┘
//! ```
//!
//! Supporting modules:
//! - [`model`]: the [`model::Widget`] record, shape checks and sanitization.
//! - [`validation`]: advisory content checks for editors.
//! - [`debounce`]: coalesces bursts of edits into a single write.
//! - [`config`] / [`init`]: configuration loading and store construction.
//! - [`error`]: the [`error::StoreError`] taxonomy shared by every layer.
//!
//! ## Example
//!
//! ```
//! use widgetapp::api::WidgetsApi;
//! use widgetapp::store::InMemoryStore;
//!
//! let mut api = WidgetsApi::new(InMemoryStore::in_memory());
//! api.create_widget("  buy   milk ".to_string()).unwrap();
//!
//! let listed = api.list_widgets().unwrap().listed_widgets;
//! assert_eq!(listed[0].content, "buy milk");
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
