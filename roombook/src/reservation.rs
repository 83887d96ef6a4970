//! Reservation types.
//!
//! A [`ReservationRequest`] carries raw form values from the presentation
//! layer. Validating it yields a [`Candidate`], which the store turns into a
//! [`Reservation`] once it has passed the conflict check.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::room::{Room, RoomCatalog};
use crate::timefmt::{self, format_display};

/// Unique reservation identifier.
///
/// Ids are Unix milliseconds of the creation instant, bumped when needed so
/// that they strictly increase in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReservationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Half-open interval `[start, end)` of local wall-clock time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::TimeRange;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
///
/// let morning = TimeRange::new(at(9), at(10)).unwrap();
/// let late_morning = TimeRange::new(at(10), at(11)).unwrap();
/// assert!(!morning.overlaps(&late_morning));
/// assert!(TimeRange::new(at(10), at(9)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    /// Creates a range, requiring `start < end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeRange`] if `start >= end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidTimeRange {
                start: format_display(start),
                end: format_display(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive end.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns `true` if the two ranges share any instant. Touching ranges do
    /// not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}～{}", format_display(self.start), format_display(self.end))
    }
}

/// Validation error for reservation fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A stored room booking.
///
/// Serialized with the field names of the browser storage layout
/// (`startTime`, `reserverName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: ReservationId,
    room: Room,
    #[serde(with = "timefmt::local_datetime")]
    start_time: NaiveDateTime,
    #[serde(with = "timefmt::local_datetime")]
    end_time: NaiveDateTime,
    reserver_name: String,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Assembles a reservation from already-known parts.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_time >= end_time` or the reserver name is
    /// empty after trimming.
    pub fn from_parts(
        id: ReservationId,
        room: Room,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        reserver_name: String,
        created_at: DateTime<Utc>,
    ) -> std::result::Result<Self, ValidationError> {
        let reservation = Self {
            id,
            room,
            start_time,
            end_time,
            reserver_name: reserver_name.trim().to_string(),
            created_at,
        };
        reservation.check()?;
        Ok(reservation)
    }

    pub(crate) fn from_candidate(
        id: ReservationId,
        candidate: Candidate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room: candidate.room,
            start_time: candidate.range.start(),
            end_time: candidate.range.end(),
            reserver_name: candidate.reserver_name,
            created_at,
        }
    }

    /// Re-checks the per-record invariants, e.g. after deserialization.
    pub(crate) fn check(&self) -> std::result::Result<(), ValidationError> {
        if self.start_time >= self.end_time {
            return Err(ValidationError {
                field: "endTime".into(),
                message: format!("reservation {} ends before it starts", self.id),
            });
        }
        if self.reserver_name.trim().is_empty() {
            return Err(ValidationError {
                field: "reserverName".into(),
                message: format!("reservation {} has an empty reserver name", self.id),
            });
        }
        Ok(())
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the booked room.
    #[must_use]
    pub const fn room(&self) -> &Room {
        &self.room
    }

    /// Returns the inclusive start.
    #[must_use]
    pub const fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Returns the exclusive end.
    #[must_use]
    pub const fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    /// Returns the booked interval.
    #[must_use]
    pub const fn time_range(&self) -> TimeRange {
        TimeRange {
            start: self.start_time,
            end: self.end_time,
        }
    }

    /// Returns the name of the person who booked.
    #[must_use]
    pub fn reserver_name(&self) -> &str {
        &self.reserver_name
    }

    /// Returns the creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A validated booking that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    room: Room,
    range: TimeRange,
    reserver_name: String,
}

impl Candidate {
    /// Creates a candidate from typed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeRange`] if `start >= end` and
    /// [`Error::MissingFields`] if the reserver name is blank.
    pub fn new(
        room: Room,
        start: NaiveDateTime,
        end: NaiveDateTime,
        reserver_name: impl Into<String>,
    ) -> Result<Self> {
        let reserver_name = reserver_name.into().trim().to_string();
        if reserver_name.is_empty() {
            return Err(Error::MissingFields {
                fields: vec!["reserver_name"],
            });
        }
        let range = TimeRange::new(start, end)?;
        Ok(Self {
            room,
            range,
            reserver_name,
        })
    }

    /// Returns the requested room.
    #[must_use]
    pub const fn room(&self) -> &Room {
        &self.room
    }

    /// Returns the requested interval.
    #[must_use]
    pub const fn time_range(&self) -> TimeRange {
        self.range
    }

    /// Returns the reserver name.
    #[must_use]
    pub fn reserver_name(&self) -> &str {
        &self.reserver_name
    }
}

/// Raw booking form values as supplied by a front end.
///
/// Start and end are either full local timestamps (`2024-01-15T09:00`) or,
/// when a date is given, times of day (`09:00`).
///
/// # Examples
///
/// ```
/// use roombook::{ReservationRequest, RoomCatalog};
///
/// let candidate = ReservationRequest::new()
///     .room("A")
///     .date("2024-01-15")
///     .start("09:00")
///     .end("10:00")
///     .reserver_name("Sato")
///     .validate(&RoomCatalog::default())
///     .unwrap();
/// assert_eq!(candidate.room().as_str(), "A");
///
/// let missing = ReservationRequest::new().room("A").validate(&RoomCatalog::default());
/// assert!(missing.is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationRequest {
    room: Option<String>,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
    reserver_name: Option<String>,
}

impl ReservationRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the room field.
    #[must_use]
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the date field (`YYYY-MM-DD`).
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the start field.
    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the end field.
    #[must_use]
    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Sets the reserver name field.
    #[must_use]
    pub fn reserver_name(mut self, name: impl Into<String>) -> Self {
        self.reserver_name = Some(name.into());
        self
    }

    /// Validates the form values into a [`Candidate`].
    ///
    /// Checks run in form order: required fields, room, timestamps, then the
    /// start-before-end rule.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingFields`] listing every blank required field
    /// - [`Error::UnknownRoom`] or [`Error::Validation`] for a bad room
    /// - [`Error::Validation`] for unparsable dates or times
    /// - [`Error::InvalidTimeRange`] if the end is not after the start
    pub fn validate(&self, catalog: &RoomCatalog) -> Result<Candidate> {
        let room = non_blank(self.room.as_deref());
        let date = non_blank(self.date.as_deref());
        let start = non_blank(self.start.as_deref());
        let end = non_blank(self.end.as_deref());
        let name = non_blank(self.reserver_name.as_deref());

        let mut missing = Vec::new();
        if room.is_none() {
            missing.push("room");
        }
        if date.is_none() && [start, end].iter().flatten().any(|t| is_time_of_day(t)) {
            missing.push("date");
        }
        if start.is_none() {
            missing.push("start");
        }
        if end.is_none() {
            missing.push("end");
        }
        if name.is_none() {
            missing.push("reserver_name");
        }

        let (Some(room), Some(start), Some(end), Some(name), true) =
            (room, start, end, name, missing.is_empty())
        else {
            return Err(Error::MissingFields { fields: missing });
        };

        let room = catalog.resolve(room)?;
        let (start, end) = match date {
            Some(date) => {
                let day = timefmt::parse_date(date).ok_or_else(|| invalid("date", date))?;
                let start_tod = timefmt::parse_time(start).ok_or_else(|| invalid("start", start))?;
                let end_tod = timefmt::parse_time(end).ok_or_else(|| invalid("end", end))?;
                (day.and_time(start_tod), day.and_time(end_tod))
            }
            None => (
                timefmt::parse_local_datetime(start).ok_or_else(|| invalid("start", start))?,
                timefmt::parse_local_datetime(end).ok_or_else(|| invalid("end", end))?,
            ),
        };

        Candidate::new(room, start, end, name)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_time_of_day(value: &str) -> bool {
    timefmt::parse_time(value).is_some()
}

fn invalid(field: &str, value: &str) -> Error {
    Error::Validation {
        field: field.to_string(),
        message: format!("cannot parse '{value}'"),
    }
}

#[cfg(test)]
mod proptests;
