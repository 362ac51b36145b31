//! Persistent key-value slots.
//!
//! A [`Storage`] maps string keys to string values, the same shape as a
//! browser's local storage. The store writes its serialized state into a
//! single key after every mutation and reads it back when it is opened.
//!
//! - [`MemoryStorage`] - in-process slots, shared between cloned handles
//! - [`FileStorage`] - one JSON file per key inside a directory

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A string-keyed slot store.
///
/// Writers are not coordinated: the last write to a key wins.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
