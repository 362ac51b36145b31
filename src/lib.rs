//! resumekit - A persistent, observable resume store.
//!
//! The core is [`store::ResumeStore`]: a single-owner container for one
//! [`model::Resume`] that merges partial updates, notifies subscribers with
//! `(next, previous)` snapshots and writes every change through to a
//! [`storage::Storage`] slot.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`error`] - Error types and result aliases
//! - [`model`] - Resume records and their partial updates
//! - [`storage`] - Key-value storage backends
//! - [`store`] - The resume store and its persistence envelope
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use resumekit::model::PersonalInfoPatch;
//! use resumekit::store::ResumeStore;
//!
//! let mut store = ResumeStore::in_memory();
//! store.update_personal_info(PersonalInfoPatch {
//!     first_name: Some("Ada".into()),
//!     ..Default::default()
//! })?;
//! assert_eq!(store.resume().personal_info.first_name, "Ada");
//! # Ok::<(), resumekit::ResumeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;
pub mod ui;

pub use error::{ResumeError, Result};
