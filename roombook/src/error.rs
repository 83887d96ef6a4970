//! Error types for the roombook library.
//!
//! Every fallible operation in the crate returns [`Result`], built on a single
//! `thiserror` enum. Rejections of a booking (missing fields, inverted time
//! range, conflicts) are ordinary variants so that callers can surface the
//! specific rule that was violated.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::Reservation;
use crate::timefmt::format_display;

/// Result type alias for operations that may fail with a roombook error.
///
/// # Examples
///
/// ```
/// use roombook::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roombook library.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required request fields were not supplied.
    #[error("missing required field(s): {}", fields.join(", "))]
    MissingFields {
        /// Names of the missing fields, in form order.
        fields: Vec<&'static str>,
    },

    /// A field was supplied but could not be interpreted.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The room is not part of the configured catalog.
    #[error("unknown room '{room}'")]
    UnknownRoom {
        /// The rejected room identifier.
        room: String,
    },

    /// The end of a requested booking is not after its start.
    #[error("end time must be after start time ({start} >= {end})")]
    InvalidTimeRange {
        /// Requested start, formatted for display.
        start: String,
        /// Requested end, formatted for display.
        end: String,
    },

    /// The requested booking overlaps an existing one in the same room.
    #[error(
        "time slot overlaps an existing reservation: {}～{} is already booked",
        format_display(existing.start_time()),
        format_display(existing.end_time())
    )]
    Conflict {
        /// The first overlapping reservation in store order.
        existing: Box<Reservation>,
    },

    /// There were no reservations to export.
    #[error("no reservation data to export")]
    NothingToExport,

    /// A storage backend error occurred.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The persisted reservation list could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Writing CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data violates an invariant of the reservation set.
    #[error("corrupt reservation data: {details}")]
    CorruptData {
        /// Details about the violated invariant.
        details: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Whether this error is a rejection of user input rather than a failure
    /// of the environment (storage, I/O, configuration).
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::Error;
    ///
    /// assert!(Error::NothingToExport.is_rejection());
    /// assert!(!Error::Io(std::io::Error::other("disk")).is_rejection());
    /// ```
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingFields { .. }
                | Self::Validation { .. }
                | Self::UnknownRoom { .. }
                | Self::InvalidTimeRange { .. }
                | Self::Conflict { .. }
                | Self::NothingToExport
        )
    }

    /// Returns the conflicting reservation if this is a conflict error.
    #[must_use]
    pub fn conflicting_reservation(&self) -> Option<&Reservation> {
        match self {
            Self::Conflict { existing } => Some(existing),
            _ => None,
        }
    }
}
