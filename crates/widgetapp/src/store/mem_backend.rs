use super::backend::StorageBackend;
use crate::error::{Result, StoreError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_unavailable: RefCell<bool>,
    failing_keys: RefCell<HashSet<String>>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read and write fail as if storage were blocked.
    pub fn set_simulate_unavailable(&self, simulate: bool) {
        *self.simulate_unavailable.borrow_mut() = simulate;
    }

    /// Make writes to `key` fail with an I/O error.
    pub fn fail_writes_to(&self, key: &str) {
        self.failing_keys.borrow_mut().insert(key.to_string());
    }

    /// Put raw text under a key, bypassing the store (for corruption tests).
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw text under a key, bypassing the store.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    fn check_available(&self) -> Result<()> {
        if *self.simulate_unavailable.borrow() {
            return Err(StoreError::StorageUnavailable(
                "Simulated unavailable storage".to_string(),
            ));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        if self.failing_keys.borrow().contains(key) {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Simulated write error for {}", key),
            )));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn is_available(&self) -> bool {
        !*self.simulate_unavailable.borrow()
    }
}
