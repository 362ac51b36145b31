//! In-process storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

use super::Storage;

/// Storage backed by a map that lives as long as its handles.
///
/// Cloning the handle shares the underlying slots, so a test can keep one
/// handle while the store owns another.
///
/// # Example
///
/// ```
/// use resumekit::storage::{MemoryStorage, Storage};
///
/// let storage = MemoryStorage::new();
/// let other = storage.clone();
/// storage.set_item("greeting", "hello").unwrap();
/// assert_eq!(other.get_item("greeting").unwrap().as_deref(), Some("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Check if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
