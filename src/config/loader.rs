//! Configuration file discovery, parsing and layering.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ResumeError, Result};
use crate::store::DEFAULT_STORAGE_KEY;

/// Environment variable that overrides the storage directory.
pub const STORAGE_DIR_ENV: &str = "RESUMEKIT_STORAGE_DIR";

/// Contents of a `config.yml` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Directory holding the storage slots.
    pub storage_dir: Option<PathBuf>,
    /// Key the resume is stored under.
    pub storage_key: Option<String>,
}

/// Resolved storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the storage slots.
    pub storage_dir: PathBuf,
    /// Key the resume is stored under.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_dir: Self::default_home().join("storage"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// The resumekit home directory: `~/.resumekit`.
    pub fn default_home() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resumekit")
    }

    /// The user config file, if it exists: `~/.resumekit/config.yml`.
    pub fn find_user_config() -> Option<PathBuf> {
        let path = Self::default_home().join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Load settings from the config file and environment.
    ///
    /// An explicit `config_override` must exist; the default user config is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if `config_override` doesn't exist.
    /// Returns `ConfigParseError` if the YAML is invalid.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let file = match config_override {
            Some(path) => load_config_file(path)?,
            None => match Self::find_user_config() {
                Some(path) => load_config_file(&path)?,
                None => ConfigFile::default(),
            },
        };

        let env_dir = std::env::var_os(STORAGE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self::resolve(file, env_dir))
    }

    /// Layer a config file and an environment override over the defaults.
    pub fn resolve(file: ConfigFile, env_dir: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            storage_dir: env_dir.or(file.storage_dir).unwrap_or(defaults.storage_dir),
            storage_key: file.storage_key.unwrap_or(defaults.storage_key),
        }
    }

    /// Apply a command-line storage directory, if given.
    pub fn with_storage_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.storage_dir = dir;
        }
        self
    }
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ResumeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ResumeError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ConfigFile`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| ResumeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
