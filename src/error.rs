//! Error types for resumekit operations.
//!
//! This module defines [`ResumeError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Store mutations never fail on their own; only the storage write that
//!   follows them can produce an error
//! - Unknown record ids are not errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for resumekit operations.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// A storage key cannot be mapped onto the backing store.
    #[error("Invalid storage key '{key}': {message}")]
    InvalidStorageKey { key: String, message: String },

    /// The persisted value under a key could not be decoded.
    #[error("Failed to parse stored value for '{key}': {message}")]
    StorageParse { key: String, message: String },

    /// The resume could not be serialized for storage.
    #[error("Failed to serialize resume: {message}")]
    Serialize { message: String },

    /// A persisted envelope could not be migrated to the current version.
    #[error("Failed to migrate stored state from version {from} to {to}: {message}")]
    Migration { from: u32, to: u32, message: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for resumekit operations.
pub type Result<T> = std::result::Result<T, ResumeError>;
