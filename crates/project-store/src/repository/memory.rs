//! In-memory key-value storage.
//!
//! Clones share the same map, so a test can keep a handle and inspect what
//! the repository wrote.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::traits::{KeyValueStorage, StorageError};

#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one raw value
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of successful `set_item` calls
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
