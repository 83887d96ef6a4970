//! Timestamp parsing and formatting.
//!
//! Booking times are local wall-clock values without a zone, exactly as a
//! `datetime-local` form field produces them. They are shown and exported as
//! `YYYY/MM/DD HH:MM`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Display and CSV format for timestamps.
pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Format used when persisting local timestamps.
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const TIME_INPUT_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Formats a timestamp as `YYYY/MM/DD HH:MM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::timefmt::format_display;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 7, 30).unwrap();
/// assert_eq!(format_display(ts), "2024/01/05 09:07");
/// ```
#[must_use]
pub fn format_display(ts: NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Parses a local date-time such as `2024-01-15T09:00` or `2024-01-15 09:00:30`.
///
/// Returns `None` if no accepted layout matches.
#[must_use]
pub fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parses a calendar date in `YYYY-MM-DD` form.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parses a time of day in `HH:MM` or `HH:MM:SS` form.
#[must_use]
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    TIME_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// Serde adapter for local timestamps stored as text.
///
/// Reads both minute and second precision; always writes seconds.
pub(crate) mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.format(super::STORAGE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_local_datetime(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid local timestamp: {raw}")))
    }
}
