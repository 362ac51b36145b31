//! Configuration loading.
//!
//! resumekit keeps its file-backed storage in a directory and writes the
//! resume under a single key. Both can be configured:
//!
//! 1. Defaults (`~/.resumekit/storage`, key `resume-storage`)
//! 2. Config file (`~/.resumekit/config.yml`, or `--config PATH`)
//! 3. `RESUMEKIT_STORAGE_DIR` environment variable
//! 4. `--storage-dir` command-line flag
//!
//! Later sources override earlier ones.

pub mod loader;

pub use loader::{load_config_file, parse_config, ConfigFile, StoreConfig, STORAGE_DIR_ENV};
