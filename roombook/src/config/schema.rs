//! Configuration schema definitions.

use std::time::Duration;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::{CsvExporter, ExportTimeZone, OutputFormat, DEFAULT_ROOM_LABEL};
use crate::room::RoomCatalog;

/// Lock wait used when none is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; the
/// accessor methods apply the built-in defaults.
///
/// # Examples
///
/// ```
/// use roombook::config::Config;
///
/// let config: Config = serde_yaml::from_str("rooms: [A, B, C, D]\nroom_label: Room ").unwrap();
/// assert_eq!(config.catalog().unwrap().rooms().len(), 4);
/// assert_eq!(config.room_label(), "Room ");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Bookable rooms in display order.
    pub rooms: Option<Vec<String>>,

    /// Prefix put before room ids in listings and exports.
    pub room_label: Option<String>,

    /// Maximum time to wait for the database lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Default format for listings.
    pub output_format: Option<OutputFormat>,

    /// Fixed UTC offset for creation times in CSV exports (minutes). Local
    /// time when unset.
    pub csv_utc_offset_minutes: Option<i32>,
}

impl Config {
    /// The room catalog, `A`, `B`, `C` unless configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured list is empty, has duplicates or
    /// holds an invalid identifier.
    pub fn catalog(&self) -> Result<RoomCatalog> {
        match &self.rooms {
            Some(rooms) => RoomCatalog::from_ids(rooms),
            None => Ok(RoomCatalog::default()),
        }
    }

    /// The room label prefix.
    #[must_use]
    pub fn room_label(&self) -> &str {
        self.room_label.as_deref().unwrap_or(DEFAULT_ROOM_LABEL)
    }

    /// The database busy timeout.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// The default listing format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// The zone for creation times in exports.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured offset is outside ±24 hours.
    pub fn export_time_zone(&self) -> Result<ExportTimeZone> {
        let Some(minutes) = self.csv_utc_offset_minutes else {
            return Ok(ExportTimeZone::Local);
        };
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(ExportTimeZone::Fixed)
            .ok_or_else(|| Error::Validation {
                field: "csv_utc_offset_minutes".into(),
                message: format!("offset of {minutes} minutes is out of range"),
            })
    }

    /// A CSV exporter carrying the configured label and zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured offset is out of range.
    pub fn csv_exporter(&self) -> Result<CsvExporter> {
        Ok(CsvExporter::new()
            .with_room_label(self.room_label())
            .with_time_zone(self.export_time_zone()?))
    }
}
