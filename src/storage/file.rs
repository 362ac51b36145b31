//! File-backed storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes use the
//! write-to-temp-then-rename pattern so a crash mid-write never leaves a
//! truncated slot behind.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{ResumeError, Result};

use super::Storage;

/// Storage that keeps one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the file path backing `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        Some("must not be empty")
    } else if key.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else if key.starts_with('.') {
        Some("must not start with '.'")
    } else {
        None
    };

    match reason {
        Some(message) => Err(ResumeError::InvalidStorageKey {
            key: key.to_string(),
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::trace!(key, path = %path.display(), "wrote storage slot");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
