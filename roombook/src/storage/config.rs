//! Storage configuration and data directory resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Database file name inside the data directory.
pub const DATABASE_FILE_NAME: &str = "roombook.db";

/// Configuration for the `SQLite` backend.
///
/// # Examples
///
/// ```
/// use roombook::storage::StorageConfig;
/// use std::time::Duration;
///
/// let config = StorageConfig::new("/tmp/roombook.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the database (and its directory) if missing.
    pub auto_create: bool,
}

impl StorageConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults: 5000ms busy timeout, auto-create on.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

/// Returns the default data directory, `~/.roombook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".roombook"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the database path.
///
/// Resolution order:
/// 1. `<data_dir>/roombook.db` if `data_dir` is given
/// 2. `$ROOMBOOK_DATA_DIR/roombook.db` if the variable is set
/// 3. `~/.roombook/roombook.db`
///
/// # Errors
///
/// Returns an error if the home directory is needed but cannot be determined.
pub fn resolve_database_path(data_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = data_dir {
        return Ok(dir.join(DATABASE_FILE_NAME));
    }
    if let Ok(dir) = std::env::var("ROOMBOOK_DATA_DIR") {
        return Ok(PathBuf::from(dir).join(DATABASE_FILE_NAME));
    }
    Ok(default_data_dir()?.join(DATABASE_FILE_NAME))
}
