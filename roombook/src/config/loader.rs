//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the user configuration inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// File name of a project configuration.
pub const PROJECT_CONFIG_FILE: &str = "roombook.yaml";

/// A configuration file with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user and project files.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files, lowest precedence first.
    ///
    /// 1. `{data_dir}/config.yaml` (precedence 1)
    /// 2. The nearest `roombook.yaml` walking up from `working_dir`
    ///    (precedence 2)
    ///
    /// Without `data_dir` the default data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_config(data_dir)? {
            sources.push(user);
        }
        if let Some(project) = Self::discover_project_config(working_dir)? {
            sources.push(project);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => crate::storage::default_data_dir()?,
        };
        let path = dir.join(USER_CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project file at or above `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file found cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        for dir in start_dir.ancestors() {
            let path = dir.join(PROJECT_CONFIG_FILE);
            if path.is_file() {
                let config = Self::load_file(&path)?;
                return Ok(Some(ConfigSource {
                    path,
                    precedence: 2,
                    config,
                }));
            }
        }
        Ok(None)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}
