//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! managers. Request handling never reads process-wide environment variables.

use crate::constants::DEFAULT_DATA_DIR;
use crate::{HmsError, HmsResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The data directory is created if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `HmsError::InvalidInput` if the path exists but is not a directory,
    /// or `HmsError::DataDirCreation` if it cannot be created.
    pub fn new(data_dir: PathBuf) -> HmsResult<Self> {
        if data_dir.exists() && !data_dir.is_dir() {
            return Err(HmsError::InvalidInput(format!(
                "data directory is not a directory: {}",
                data_dir.display()
            )));
        }

        std::fs::create_dir_all(&data_dir).map_err(HmsError::DataDirCreation)?;

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Resolve the data directory from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_DATA_DIR`].
pub fn data_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
