use std::fs;
use tempfile::TempDir;
use widgetapp::error::StoreError;
use widgetapp::store::backend::StorageBackend;
use widgetapp::store::fs_backend::FsBackend;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_item_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get_item("text-widgets").unwrap(), None);

    backend.set_item("text-widgets", "[]").unwrap();
    assert_eq!(
        backend.get_item("text-widgets").unwrap(),
        Some("[]".to_string())
    );

    backend.set_item("text-widgets", "[1]").unwrap();
    assert_eq!(
        backend.get_item("text-widgets").unwrap(),
        Some("[1]".to_string())
    );
}

#[test]
fn test_fs_backend_creates_root_lazily() {
    let (_dir, backend) = setup();
    assert!(!backend.root().exists());

    backend.set_item("k", "v").unwrap();
    assert!(backend.root().is_dir());
    assert!(backend.root().join("k.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.set_item("text-widgets", "[]").unwrap();
    backend.set_item("text-widgets-backup", "{}").unwrap();

    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_root_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "not a directory").unwrap();
    let backend = FsBackend::new(blocker);

    assert!(!backend.is_available());
    assert!(matches!(
        backend.get_item("text-widgets"),
        Err(StoreError::StorageUnavailable(_))
    ));
    assert!(matches!(
        backend.set_item("text-widgets", "[]"),
        Err(StoreError::StorageUnavailable(_))
    ));
}

#[test]
fn test_fs_backend_keys_are_isolated() {
    let (_dir, backend) = setup();
    backend.set_item("a", "1").unwrap();
    backend.set_item("b", "2").unwrap();

    assert_eq!(backend.get_item("a").unwrap(), Some("1".to_string()));
    assert_eq!(backend.get_item("b").unwrap(), Some("2".to_string()));
}
