//! Environment variable overrides for configuration.
//!
//! `ROOMBOOK_*` variables override values from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Comma-separated room catalog.
pub const ENV_ROOMS: &str = "ROOMBOOK_ROOMS";
/// Room label prefix.
pub const ENV_ROOM_LABEL: &str = "ROOMBOOK_ROOM_LABEL";
/// Busy timeout in seconds.
pub const ENV_MAXIMUM_LOCK_WAIT_SECONDS: &str = "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Default listing format.
pub const ENV_OUTPUT_FORMAT: &str = "ROOMBOOK_OUTPUT_FORMAT";
/// CSV creation-time offset in minutes.
pub const ENV_CSV_UTC_OFFSET_MINUTES: &str = "ROOMBOOK_CSV_UTC_OFFSET_MINUTES";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds a value of the wrong shape
    /// (non-numeric timeout, unknown format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(rooms) = env::var(ENV_ROOMS) {
            config.rooms = Some(Self::parse_rooms(&rooms));
        }

        if let Ok(label) = env::var(ENV_ROOM_LABEL) {
            config.room_label = Some(label);
        }

        if let Ok(seconds) = env::var(ENV_MAXIMUM_LOCK_WAIT_SECONDS) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: ENV_MAXIMUM_LOCK_WAIT_SECONDS.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(format.parse().map_err(|_| Error::Validation {
                field: ENV_OUTPUT_FORMAT.into(),
                message: format!("Unknown output format '{format}'"),
            })?);
        }

        if let Ok(minutes) = env::var(ENV_CSV_UTC_OFFSET_MINUTES) {
            config.csv_utc_offset_minutes =
                Some(minutes.trim().parse().map_err(|_| Error::Validation {
                    field: ENV_CSV_UTC_OFFSET_MINUTES.into(),
                    message: "Must be an integer number of minutes".into(),
                })?);
        }

        Ok(())
    }

    /// Split a comma-separated room list, dropping blank entries.
    fn parse_rooms(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|room| !room.is_empty())
            .map(String::from)
            .collect()
    }
}
