//! Store configuration.

use crate::{StoreError, StoreErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable that overrides the configured data directory.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Where games are stored.
///
/// ```toml
/// data_dir = "./devdata"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory; games live under `<data_dir>/games`.
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./devdata")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        debug!("Loading store config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::new(
                StoreErrorKind::Config,
                format!("Failed to read config file: {}", e),
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            StoreError::new(
                StoreErrorKind::Config,
                format!("Failed to parse config: {}", e),
            )
        })?;

        info!(data_dir = %config.data_dir.display(), "Store config loaded");
        Ok(config)
    }

    /// Resolves the configuration: the file at `path` if given, otherwise
    /// defaults, then `DATA_DIR` from the environment on top.
    ///
    /// Reads the process environment only; binaries load `.env` first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if `path` is given but unreadable.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_override())
    }

    /// Applies the `DATA_DIR` environment variable, if set and non-empty.
    pub fn with_env_override(self) -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => {
                debug!(data_dir = %dir, "Data directory overridden by environment");
                Self::new(dir)
            }
            _ => self,
        }
    }

    /// Directory holding the game files.
    pub fn games_dir(&self) -> PathBuf {
        self.data_dir.join("games")
    }
}
