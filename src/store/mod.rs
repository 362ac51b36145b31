//! The resume store.
//!
//! [`ResumeStore`] owns the live [`Resume`](crate::model::Resume), applies
//! mutations as structurally shared updates, notifies subscribers and
//! writes every change through to a [`Storage`](crate::storage::Storage)
//! slot.
//!
//! The store is constructed explicitly and handed to whatever needs it;
//! there is no process-wide instance.

pub mod envelope;
mod list;
pub mod listeners;
pub mod resume_store;

pub use envelope::{MigrateFn, PersistOptions, DEFAULT_STORAGE_KEY};
pub use listeners::{Listener, Subscription};
pub use resume_store::ResumeStore;
