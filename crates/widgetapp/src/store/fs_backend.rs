use super::backend::StorageBackend;
use crate::error::{Result, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed key-value medium: each key is one JSON file in `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn item_path(&self, key: &str) -> PathBuf {
        let safe_key: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.json", safe_key))
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.is_dir() {
            return Ok(());
        }
        if self.root.exists() {
            return Err(StoreError::StorageUnavailable(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }
        fs::create_dir_all(&self.root).map_err(|e| unavailable(&self.root, e))
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> StoreError {
    StoreError::StorageUnavailable(format!("{}: {}", path.display(), err))
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if !self.is_available() {
            return Err(StoreError::StorageUnavailable(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }
        let path = self.item_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(StoreError::Parse(format!(
                "{} is not valid UTF-8 text",
                path.display()
            ))),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(unavailable(&path, e)),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;

        let target = self.item_path(key);

        // Atomic Write
        let tmp = self.root.join(format!(".{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, value).map_err(StoreError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Io(e));
        }

        Ok(())
    }

    /// The root is usable if it is a directory or does not exist yet.
    fn is_available(&self) -> bool {
        self.root.is_dir() || !self.root.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_mapped_to_safe_file_names() {
        let backend = FsBackend::new(PathBuf::from("/data"));
        assert_eq!(
            backend.item_path("text-widgets"),
            PathBuf::from("/data/text-widgets.json")
        );
        assert_eq!(
            backend.item_path("../escape"),
            PathBuf::from("/data/___escape.json")
        );
    }

    #[test]
    fn undecodable_file_is_reported_as_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        fs::write(backend.item_path("k"), [0xff, 0xfe, b'[']).unwrap();

        assert!(matches!(backend.get_item("k"), Err(StoreError::Parse(_))));
    }

    #[test]
    fn missing_root_is_available_without_being_created() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("later"));

        assert!(backend.is_available());
        assert_eq!(backend.get_item("k").unwrap(), None);
        assert!(!backend.root().exists());
    }
}
