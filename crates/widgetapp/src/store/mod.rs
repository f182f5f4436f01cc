//! # Storage Layer
//!
//! This module defines the storage abstraction for widgets. The [`DataStore`]
//! trait is the widget-level interface every client talks to; the
//! [`backend::StorageBackend`] trait is the raw key-value medium underneath.
//!
//! ## Persisted Layout
//!
//! Two keys, both owned exclusively by [`widget_store::WidgetStore`]:
//!
//! ```text
//! text-widgets         # JSON array of widgets (the primary copy)
//! text-widgets-backup  # {"widgets": [...], "timestamp": "...", "version": "1.0"}
//! ```
//!
//! With [`fs_backend::FsBackend`] each key is a file in the data directory:
//!
//! ```text
//! <data_dir>/
//! ├── text-widgets.json
//! └── text-widgets-backup.json
//! ```
//!
//! ## Read Path
//!
//! 1. **Absent**: No primary value → empty list.
//! 2. **Unavailable**: Medium blocked → empty list (logged, recoverable).
//! 3. **Corrupt**: Primary is not JSON, or not an array → recover from backup.
//!    No usable backup → `Parse` error, which `get_widgets` degrades to an
//!    empty list. [`widget_store::WidgetStore::load`] surfaces it.
//! 4. **Partial**: Elements are validated one by one; invalid ones are dropped.
//!
//! ## Write Path
//!
//! All-or-nothing shape check → sanitize → quota check → backup (best effort)
//! → primary. Write failures always reach the caller.
//!
//! ## Concurrency
//!
//! `add`, `update` and `delete` are read-modify-write over the whole
//! collection with no locking. Two writers interleaving will lose the first
//! writer's change. This is accepted for a single-user store.
//!
//! ## Implementations
//!
//! - [`FileStore`]: Production store over the filesystem.
//! - [`InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! A network-backed store (`GET/PUT/POST/PATCH/DELETE /widgets`) would
//! implement [`DataStore`] directly; none ships with this crate.

use crate::error::{Result, StoreError};
use crate::model::{is_blank_id, Widget};
use serde::Serialize;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod widget_store;

pub type FileStore = widget_store::WidgetStore<fs_backend::FsBackend>;
pub type InMemoryStore = widget_store::WidgetStore<mem_backend::MemBackend>;

/// Report from the `doctor` operation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    /// Widgets in the collection after the check
    pub widgets: usize,
    /// The primary copy was corrupt and the backup was used
    pub recovered_from_backup: bool,
    /// Stored elements that failed shape validation
    pub dropped_invalid: usize,
    /// The primary copy was rewritten from the recovered collection
    pub rewritten: bool,
    /// Primary is corrupt and no usable backup exists
    pub unrecoverable: Option<String>,
}

/// Abstract interface for widget storage.
///
/// Implementations own persistence, validation and recovery of the whole
/// widget collection.
pub trait DataStore {
    /// All widgets in insertion order. Unreadable storage reads as empty.
    fn get_widgets(&self) -> Result<Vec<Widget>>;

    /// Like [`DataStore::get_widgets`], but unavailable storage and
    /// unrecoverable data are errors. Read-modify-write paths use this.
    fn read_widgets(&self) -> Result<Vec<Widget>>;

    /// Replace the whole collection
    fn save_widgets(&mut self, widgets: &[Widget]) -> Result<()>;

    /// Append a widget. The caller assigns id and timestamps.
    fn add_widget(&mut self, widget: Widget) -> Result<Widget>;

    /// Replace a widget's content. Returns `None` if no widget has that id.
    fn update_widget(&mut self, id: &str, content: &str) -> Result<Option<Widget>>;

    /// Like [`DataStore::update_widget`], for content that arrives as raw bytes.
    fn update_widget_bytes(&mut self, id: &str, content: &[u8]) -> Result<Option<Widget>> {
        if is_blank_id(id) {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        let text = std::str::from_utf8(content).map_err(|e| {
            StoreError::InvalidContent(format!("content is not valid UTF-8 text: {}", e))
        })?;
        self.update_widget(id, text)
    }

    /// Remove a widget. Returns `false` if no widget has that id.
    fn delete_widget(&mut self, id: &str) -> Result<bool>;

    /// Verify and fix consistency issues
    fn doctor(&mut self) -> Result<DoctorReport>;
}
