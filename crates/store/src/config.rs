//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CARTWHEEL_DATA_DIR` - Directory for the file-backed storage port
//!   (default: `.cartwheel`)
//!
//! This is the only place the library reads the environment; everything
//! else receives its dependencies explicitly.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::storage::{FileStorage, StorageError};

/// Environment variable naming the data directory.
const DATA_DIR_VAR: &str = "CARTWHEEL_DATA_DIR";

/// Data directory used when the environment does not name one.
const DEFAULT_DATA_DIR: &str = ".cartwheel";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory the file-backed port persists into.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CARTWHEEL_DATA_DIR` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = data_dir_from(std::env::var(DATA_DIR_VAR).ok())?;
        Ok(Self { data_dir })
    }

    /// The configured data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Open the file-backed storage port at the configured directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be created.
    pub fn open_storage(&self) -> Result<FileStorage, StorageError> {
        FileStorage::open(&self.data_dir)
    }
}

/// Resolve the data directory from an environment value.
fn data_dir_from(value: Option<String>) -> Result<PathBuf, ConfigError> {
    match value {
        None => Ok(PathBuf::from(DEFAULT_DATA_DIR)),
        Some(dir) if dir.is_empty() => Err(ConfigError::InvalidEnvVar(
            DATA_DIR_VAR.to_owned(),
            "must not be empty".to_owned(),
        )),
        Some(dir) => Ok(PathBuf::from(dir)),
    }
}
