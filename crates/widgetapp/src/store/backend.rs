use crate::error::Result;

/// Abstract interface for the raw key-value medium.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while WidgetStore handles the "what" (validation, quota, backup, recovery).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns `StorageUnavailable` if the medium itself cannot be reached,
    /// and `Parse` if the stored value cannot be decoded as text.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Check if the medium can be used at all (e.g. the data directory exists
    /// or can be created). Checked before every save.
    fn is_available(&self) -> bool;
}
