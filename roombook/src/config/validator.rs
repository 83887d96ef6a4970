//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::room::Room;

/// Longest accepted room label.
const MAX_LABEL_LEN: usize = 64;

/// Largest accepted CSV offset, in minutes.
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { rooms: Some(vec![]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref rooms) = config.rooms {
            Self::validate_rooms(rooms)?;
        }

        if let Some(ref label) = config.room_label {
            Self::validate_label(label)?;
        }

        if config.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if let Some(minutes) = config.csv_utc_offset_minutes {
            if minutes.abs() >= MAX_OFFSET_MINUTES {
                return Err(Error::Validation {
                    field: "csv_utc_offset_minutes".into(),
                    message: format!("Offset must be within ±{MAX_OFFSET_MINUTES} minutes"),
                });
            }
        }

        Ok(())
    }

    fn validate_rooms(rooms: &[String]) -> Result<()> {
        if rooms.is_empty() {
            return Err(Error::Validation {
                field: "rooms".into(),
                message: "At least one room must be configured".into(),
            });
        }

        let mut seen: Vec<Room> = Vec::with_capacity(rooms.len());
        for id in rooms {
            let room = Room::new(id).map_err(|e| Error::Validation {
                field: "rooms".into(),
                message: e.to_string(),
            })?;
            if seen.contains(&room) {
                return Err(Error::Validation {
                    field: "rooms".into(),
                    message: format!("Room '{room}' is listed more than once"),
                });
            }
            seen.push(room);
        }

        Ok(())
    }

    fn validate_label(label: &str) -> Result<()> {
        if label.trim().is_empty() {
            return Err(Error::Validation {
                field: "room_label".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        if label.chars().count() > MAX_LABEL_LEN {
            return Err(Error::Validation {
                field: "room_label".into(),
                message: format!("Cannot exceed {MAX_LABEL_LEN} characters"),
            });
        }
        if label.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: "room_label".into(),
                message: "Cannot contain control characters".into(),
            });
        }
        Ok(())
    }
}
