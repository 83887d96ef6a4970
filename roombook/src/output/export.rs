//! CSV export of reservations.

use std::io;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use csv::WriterBuilder;

use crate::reservation::Reservation;
use crate::room::RoomFilter;
use crate::timefmt::format_display;
use crate::{Error, Result};

/// Header row of every export.
pub const CSV_HEADER: [&str; 5] = ["会議室", "利用開始日時", "利用終了日時", "予約者名", "予約日時"];

/// Prefix put in front of room ids.
pub const DEFAULT_ROOM_LABEL: &str = "会議室";

/// Zone in which creation instants are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportTimeZone {
    /// The zone of the machine running the export.
    #[default]
    Local,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl ExportTimeZone {
    fn wall_clock(self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
        }
    }
}

/// Writes reservations as CSV.
///
/// Rows are room label, start, end, reserver name and creation time, with
/// timestamps as `YYYY/MM/DD HH:MM`. Fields containing commas, quotes or line
/// breaks are quoted.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
/// use roombook::output::CsvExporter;
/// use roombook::{Reservation, ReservationId, Room};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let reservation = Reservation::from_parts(
///     ReservationId::new(1),
///     Room::new("A").unwrap(),
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(10, 0, 0).unwrap(),
///     "Sato".into(),
///     Utc.with_ymd_and_hms(2024, 1, 14, 1, 30, 0).unwrap(),
/// )
/// .unwrap();
///
/// let exporter = CsvExporter::new().with_utc_offset(FixedOffset::east_opt(9 * 3600).unwrap());
/// let csv = exporter.export([&reservation]).unwrap();
/// assert_eq!(
///     csv,
///     "会議室,利用開始日時,利用終了日時,予約者名,予約日時\n\
///      会議室A,2024/01/15 09:00,2024/01/15 10:00,Sato,2024/01/14 10:30\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExporter {
    room_label: String,
    zone: ExportTimeZone,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            room_label: DEFAULT_ROOM_LABEL.to_string(),
            zone: ExportTimeZone::Local,
        }
    }
}

impl CsvExporter {
    /// Creates an exporter with the default label writing local time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the room label prefix.
    #[must_use]
    pub fn with_room_label(mut self, label: impl Into<String>) -> Self {
        self.room_label = label.into();
        self
    }

    /// Writes creation instants at a fixed UTC offset instead of local time.
    #[must_use]
    pub const fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.zone = ExportTimeZone::Fixed(offset);
        self
    }

    /// Sets the zone for creation instants.
    #[must_use]
    pub const fn with_time_zone(mut self, zone: ExportTimeZone) -> Self {
        self.zone = zone;
        self
    }

    /// Exports reservations in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToExport`] if there are no reservations, or a
    /// CSV error if writing fails.
    pub fn export<'a, I>(&self, reservations: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut rows = reservations.into_iter().peekable();
        if rows.peek().is_none() {
            return Err(Error::NothingToExport);
        }
        self.render(rows)
    }

    /// Renders the header and rows, also when there are no rows.
    ///
    /// # Errors
    ///
    /// Returns a CSV error if writing fails.
    pub fn render<'a, I>(&self, reservations: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut buf = Vec::new();
        self.write_to(&mut buf, reservations)?;
        String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Streams the header and rows into `writer`.
    ///
    /// # Errors
    ///
    /// Returns a CSV error if writing fails.
    pub fn write_to<'a, W, I>(&self, writer: W, reservations: I) -> Result<()>
    where
        W: io::Write,
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut out = WriterBuilder::new().from_writer(writer);
        out.write_record(CSV_HEADER)?;
        for reservation in reservations {
            out.write_record([
                format!("{}{}", self.room_label, reservation.room()),
                format_display(reservation.start_time()),
                format_display(reservation.end_time()),
                reservation.reserver_name().to_string(),
                format_display(self.zone.wall_clock(reservation.created_at())),
            ])?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Name of the export file for `date`: `reservations_YYYYMMDD.csv`, with a
/// `_roomX` suffix when the export is narrowed to one room.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::output::export_file_name;
/// use roombook::{Room, RoomFilter};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(export_file_name(date, &RoomFilter::All), "reservations_20240307.csv");
/// assert_eq!(
///     export_file_name(date, &RoomFilter::Room(Room::new("B").unwrap())),
///     "reservations_20240307_roomB.csv"
/// );
/// ```
#[must_use]
pub fn export_file_name(date: NaiveDate, filter: &RoomFilter) -> String {
    let stamp = date.format("%Y%m%d");
    match filter.room() {
        Some(room) => format!("reservations_{stamp}_room{room}.csv"),
        None => format!("reservations_{stamp}.csv"),
    }
}
