use super::backend::StorageBackend;
use super::mem_backend::MemBackend;
use super::{DataStore, DoctorReport};
use crate::error::{Operation, Result, StoreError};
use crate::model::{is_blank_id, json_type_name, sanitize_content, BackupRecord, Widget};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

pub const PRIMARY_KEY: &str = "text-widgets";
pub const BACKUP_KEY: &str = "text-widgets-backup";
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub primary_key: String,
    pub backup_key: String,
    /// Maximum serialized size of the primary collection, in bytes
    pub quota_bytes: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            primary_key: PRIMARY_KEY.to_string(),
            backup_key: BACKUP_KEY.to_string(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadSource {
    /// Nothing stored yet
    Empty,
    Primary,
    /// Primary was corrupt; the backup record was used
    Backup,
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub widgets: Vec<Widget>,
    pub source: LoadSource,
    /// Stored elements that failed shape validation and were skipped
    pub dropped: usize,
}

pub struct WidgetStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    options: StoreOptions,
}

impl WidgetStore<MemBackend> {
    pub fn in_memory() -> Self {
        Self::with_backend(MemBackend::new())
    }
}

impl<B: StorageBackend> WidgetStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_options(backend, StoreOptions::default())
    }

    pub fn with_options(backend: B, options: StoreOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Strict read: like `get_widgets`, but reports where the data came from
    /// and fails with `Parse` when neither copy is usable.
    pub fn load(&self) -> Result<Loaded> {
        let raw = match self.backend.get_item(&self.options.primary_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                return Ok(Loaded {
                    widgets: Vec::new(),
                    source: LoadSource::Empty,
                    dropped: 0,
                })
            }
            Err(StoreError::Parse(msg)) => {
                warn!(
                    key = %self.options.primary_key,
                    %msg,
                    "stored widgets are not readable text, trying backup"
                );
                return self.recover_from_backup();
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => {
                let (widgets, dropped) = validate_items(&items);
                Ok(Loaded {
                    widgets,
                    source: LoadSource::Primary,
                    dropped,
                })
            }
            Ok(other) => {
                warn!(
                    key = %self.options.primary_key,
                    found = json_type_name(&other),
                    "stored widgets are not an array, trying backup"
                );
                self.recover_from_backup()
            }
            Err(e) => {
                warn!(
                    key = %self.options.primary_key,
                    error = %e,
                    "stored widgets are not valid JSON, trying backup"
                );
                self.recover_from_backup()
            }
        }
    }

    fn recover_from_backup(&self) -> Result<Loaded> {
        let raw = self
            .backend
            .get_item(&self.options.backup_key)?
            .ok_or_else(|| StoreError::Parse("primary data is corrupt and no backup exists".into()))?;

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Parse(format!("backup is not valid JSON: {}", e)))?;
        let items = value
            .get("widgets")
            .and_then(Value::as_array)
            .ok_or_else(|| StoreError::Parse("backup has no widget list".into()))?;

        let (widgets, dropped) = validate_items(items);
        if widgets.is_empty() {
            return Err(StoreError::Parse("backup holds no usable widgets".into()));
        }

        let taken_at = value
            .get("timestamp")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        warn!(
            recovered = widgets.len(),
            dropped,
            backup_taken_at = taken_at,
            "recovered widgets from backup"
        );
        Ok(Loaded {
            widgets,
            source: LoadSource::Backup,
            dropped,
        })
    }

    /// Validate, sanitize, check quota, write backup then primary.
    fn persist(&self, widgets: &[Widget]) -> Result<()> {
        if !self.backend.is_available() {
            return Err(StoreError::StorageUnavailable(
                "widget storage cannot be written".into(),
            ));
        }

        for (index, widget) in widgets.iter().enumerate() {
            widget
                .check_shape()
                .map_err(|reason| StoreError::InvalidWidget { index, reason })?;
        }

        let clean: Vec<Widget> = widgets.iter().map(Widget::sanitized).collect();
        let payload = serde_json::to_string(&clean)?;
        if payload.len() > self.options.quota_bytes {
            return Err(StoreError::QuotaExceeded {
                size: payload.len(),
                limit: self.options.quota_bytes,
            });
        }

        let count = clean.len();
        let backup = serde_json::to_string(&BackupRecord::new(clean))?;
        if let Err(e) = self.backend.set_item(&self.options.backup_key, &backup) {
            warn!(key = %self.options.backup_key, error = %e, "failed to write widget backup");
        }

        self.backend.set_item(&self.options.primary_key, &payload)?;
        debug!(count, bytes = payload.len(), "saved widgets");
        Ok(())
    }
}

/// Parse stored elements one by one, dropping the ones that are not widgets.
fn validate_items(items: &[Value]) -> (Vec<Widget>, usize) {
    let mut widgets = Vec::with_capacity(items.len());
    let mut dropped = 0;

    for (index, item) in items.iter().enumerate() {
        match Widget::from_value(item) {
            Ok(widget) => widgets.push(widget.sanitized()),
            Err(reason) => {
                warn!(index, %reason, "dropping invalid stored widget");
                dropped += 1;
            }
        }
    }

    (widgets, dropped)
}

fn check_id(id: &str) -> Result<()> {
    if is_blank_id(id) {
        return Err(StoreError::InvalidId(id.to_string()));
    }
    Ok(())
}

impl<B: StorageBackend> DataStore for WidgetStore<B> {
    fn get_widgets(&self) -> Result<Vec<Widget>> {
        match self.load() {
            Ok(loaded) => Ok(loaded.widgets),
            Err(e @ StoreError::StorageUnavailable(_)) => {
                warn!(error = %e, "widget storage unavailable, returning no widgets");
                Ok(Vec::new())
            }
            Err(StoreError::Parse(msg)) => {
                error!(%msg, "stored widgets are unrecoverable, returning no widgets");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn read_widgets(&self) -> Result<Vec<Widget>> {
        Ok(self.load()?.widgets)
    }

    fn save_widgets(&mut self, widgets: &[Widget]) -> Result<()> {
        self.persist(widgets).map_err(|e| e.within(Operation::Save))
    }

    fn add_widget(&mut self, widget: Widget) -> Result<Widget> {
        let mut widgets = self.read_widgets()?;
        widgets.push(widget.clone());
        self.persist(&widgets)
            .map_err(|e| e.within(Operation::Save))?;
        Ok(widget)
    }

    fn update_widget(&mut self, id: &str, content: &str) -> Result<Option<Widget>> {
        check_id(id)?;
        let content = sanitize_content(content);

        let mut widgets = self.read_widgets()?;
        let Some(widget) = widgets.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };
        widget.content = content;
        widget.updated_at = Utc::now().max(widget.created_at);
        let updated = widget.clone();

        self.persist(&widgets)
            .map_err(|e| e.within(Operation::Update))?;
        Ok(Some(updated))
    }

    fn delete_widget(&mut self, id: &str) -> Result<bool> {
        check_id(id)?;

        let mut widgets = self.read_widgets()?;
        let Some(pos) = widgets.iter().position(|w| w.id == id) else {
            return Ok(false);
        };
        widgets.remove(pos);

        self.persist(&widgets)
            .map_err(|e| e.within(Operation::Delete))?;
        Ok(true)
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        let loaded = match self.load() {
            Ok(loaded) => loaded,
            Err(StoreError::Parse(msg)) => {
                return Ok(DoctorReport {
                    unrecoverable: Some(msg),
                    ..Default::default()
                })
            }
            Err(e) => return Err(e),
        };

        let mut report = DoctorReport {
            widgets: loaded.widgets.len(),
            recovered_from_backup: loaded.source == LoadSource::Backup,
            dropped_invalid: loaded.dropped,
            ..Default::default()
        };

        if report.recovered_from_backup || report.dropped_invalid > 0 {
            self.persist(&loaded.widgets)
                .map_err(|e| e.within(Operation::Save))?;
            report.rewritten = true;
        }

        Ok(report)
    }
}
