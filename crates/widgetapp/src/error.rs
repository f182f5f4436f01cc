use crate::model::ShapeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid type: expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid widget at position {index}: {reason}")]
    InvalidWidget { index: usize, reason: ShapeError },

    #[error("Invalid widget id: {0:?}")]
    InvalidId(String),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Stored widgets could not be parsed: {0}")]
    Parse(String),

    #[error("Storage quota exceeded: {size} bytes is over the {limit} byte limit")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("Failed to save widgets: {0}")]
    Save(String),

    #[error("Failed to update widget: {0}")]
    Update(String),

    #[error("Failed to delete widget: {0}")]
    Delete(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

/// The store operation an unexpected failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Update,
    Delete,
}

impl StoreError {
    /// Whether the caller may retry the operation unchanged.
    ///
    /// Environment failures (blocked medium, full quota, a failed write) are
    /// recoverable. Bad input and unrecoverable corruption are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StoreError::StorageUnavailable(_)
                | StoreError::QuotaExceeded { .. }
                | StoreError::Save(_)
                | StoreError::Update(_)
                | StoreError::Delete(_)
        )
    }

    /// Stable machine-readable code, used for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            StoreError::InvalidType { .. } => "INVALID_TYPE",
            StoreError::InvalidWidget { .. } => "INVALID_WIDGET",
            StoreError::InvalidId(_) => "INVALID_ID",
            StoreError::InvalidContent(_) => "INVALID_CONTENT",
            StoreError::Parse(_) => "PARSE_ERROR",
            StoreError::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            StoreError::Save(_) => "SAVE_ERROR",
            StoreError::Update(_) => "UPDATE_ERROR",
            StoreError::Delete(_) => "DELETE_ERROR",
            StoreError::Io(_) => "IO_ERROR",
            StoreError::Serialization(_) => "SERIALIZATION_ERROR",
            StoreError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Wrap low-level failures into the error of the operation that hit them.
    /// Errors that already belong to the taxonomy pass through untouched.
    pub fn within(self, op: Operation) -> StoreError {
        match self {
            StoreError::Io(_) | StoreError::Serialization(_) => {
                let msg = self.to_string();
                match op {
                    Operation::Save => StoreError::Save(msg),
                    Operation::Update => StoreError::Update(msg),
                    Operation::Delete => StoreError::Delete(msg),
                }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
