use crate::store::fs_backend::FsBackend;
use crate::store::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory lives as long as the store
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FileStore::with_backend(FsBackend::new(root.clone()));
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    /// Write raw text straight into the file backing `key`.
    pub fn write_raw(&self, key: &str, text: &str) {
        let path = self.store.backend().item_path(key);
        std::fs::create_dir_all(&self.root).expect("failed to create data dir");
        std::fs::write(path, text).expect("failed to write raw value");
    }

    /// Read the raw text stored under `key`, if any.
    pub fn read_raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.store.backend().item_path(key)).ok()
    }
}
