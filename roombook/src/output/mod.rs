//! Rendering reservation listings and CSV exports.
//!
//! Listings come in four shapes: per-room groups for people, a tab-separated
//! table, JSON and CSV. The CSV shape is shared with [`CsvExporter`], which
//! also names export files.

mod export;
mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reservation::Reservation;
use crate::room::RoomCatalog;
use crate::{Error, Result};

pub use export::{export_file_name, CsvExporter, ExportTimeZone, CSV_HEADER, DEFAULT_ROOM_LABEL};
pub use formatters::{CsvFormatter, GroupedFormatter, JsonFormatter, TableFormatter};

/// Renders a sorted reservation listing into text.
pub trait ListingFormatter {
    /// Format the given reservations, already filtered and sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, reservations: &[&Reservation]) -> Result<String>;
}

/// Available listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-room groups in catalog order.
    #[default]
    Grouped,
    /// Tab-separated table with a header row.
    Table,
    /// Pretty-printed JSON array in the storage layout.
    Json,
    /// CSV in the export layout.
    Csv,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// `room_label` prefixes room ids in the grouped and CSV shapes.
    #[must_use]
    pub fn create_formatter(
        self,
        catalog: &RoomCatalog,
        room_label: &str,
    ) -> Box<dyn ListingFormatter> {
        match self {
            Self::Grouped => Box::new(GroupedFormatter::new(catalog.clone(), room_label)),
            Self::Table => Box::new(TableFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter::new(
                CsvExporter::new().with_room_label(room_label),
            )),
        }
    }

    /// The lowercase name used in configuration files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grouped => "grouped",
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "grouped" => Ok(Self::Grouped),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::Validation {
                field: "output_format".into(),
                message: format!(
                    "unknown output format '{other}' (expected grouped, table, json or csv)"
                ),
            }),
        }
    }
}
