//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for widget operations, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the store instance, injected at construction
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that belongs in `commands/*.rs`) and no
//! presentation (it returns data structures, not strings).
//!
//! ## Generic Over DataStore
//!
//! `WidgetsApi<S: DataStore>` is generic over the storage:
//! - Production: `WidgetsApi<FileStore>`
//! - Testing: `WidgetsApi<InMemoryStore>`

use crate::commands::{self, import::ImportMode, CmdResult};
use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::Result;
use crate::store::DataStore;
use std::time::Duration;
use tokio::io::AsyncBufRead;

/// The main API facade for widget operations.
pub struct WidgetsApi<S: DataStore> {
    store: S,
    debounce: Duration,
}

impl<S: DataStore> WidgetsApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_widget(&mut self, content: String) -> Result<CmdResult> {
        commands::create::run(&mut self.store, content)
    }

    pub fn list_widgets(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_widgets<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn update_widget(&mut self, id: &str, content: &str) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, content)
    }

    pub fn update_widget_bytes(&mut self, id: &str, content: &[u8]) -> Result<CmdResult> {
        commands::update::run_bytes(&mut self.store, id, content)
    }

    pub fn delete_widgets<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub async fn edit_widget<R>(&mut self, id: &str, input: R) -> Result<CmdResult>
    where
        R: AsyncBufRead + Unpin,
    {
        commands::edit::run(&mut self.store, id, input, self.debounce).await
    }

    pub fn import_widgets(&mut self, raw: &str, mode: ImportMode) -> Result<CmdResult> {
        commands::import::run(&mut self.store, raw, mode)
    }

    pub fn check_content(&self, text: &str) -> CmdResult {
        commands::check::run(text)
    }

    pub fn doctor(&mut self) -> Result<CmdResult> {
        commands::doctor::run(&mut self.store)
    }
}
