//! Listing formatter implementations.

use crate::reservation::Reservation;
use crate::room::RoomCatalog;
use crate::store::group_by_room;
use crate::timefmt::format_display;
use crate::Result;

use super::{CsvExporter, ListingFormatter};

/// Column headers for the table format.
const TABLE_HEADERS: [&str; 6] = ["ID", "ROOM", "START", "END", "NAME", "CREATED"];

/// Shown by the grouped format when nothing is booked.
const EMPTY_MESSAGE: &str = "No reservations.";

/// Formatter for per-room groups.
///
/// Each group starts with the labelled room (`会議室A`) followed by one
/// indented line per reservation.
pub struct GroupedFormatter {
    catalog: RoomCatalog,
    room_label: String,
}

impl GroupedFormatter {
    /// Create a grouped formatter.
    #[must_use]
    pub fn new(catalog: RoomCatalog, room_label: impl Into<String>) -> Self {
        Self {
            catalog,
            room_label: room_label.into(),
        }
    }
}

impl ListingFormatter for GroupedFormatter {
    fn format(&self, reservations: &[&Reservation]) -> Result<String> {
        if reservations.is_empty() {
            return Ok(EMPTY_MESSAGE.to_string());
        }

        let mut out = String::new();
        for (i, group) in group_by_room(reservations, &self.catalog).iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.room_label);
            out.push_str(group.room.as_str());
            out.push('\n');
            for r in &group.reservations {
                out.push_str(&format!(
                    "  {}  {}  (id {})\n",
                    r.time_range(),
                    r.reserver_name(),
                    r.id()
                ));
            }
        }

        Ok(out.trim_end().to_string())
    }
}

/// Formatter for a tab-separated table.
pub struct TableFormatter;

impl ListingFormatter for TableFormatter {
    fn format(&self, reservations: &[&Reservation]) -> Result<String> {
        let mut lines = vec![TABLE_HEADERS.join("\t")];

        for r in reservations {
            lines.push(
                [
                    r.id().to_string(),
                    r.room().to_string(),
                    format_display(r.start_time()),
                    format_display(r.end_time()),
                    r.reserver_name().to_string(),
                    r.created_at().to_rfc3339(),
                ]
                .join("\t"),
            );
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl ListingFormatter for JsonFormatter {
    fn format(&self, reservations: &[&Reservation]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reservations)?)
    }
}

/// Formatter for CSV output, using the export layout.
pub struct CsvFormatter {
    exporter: CsvExporter,
}

impl CsvFormatter {
    /// Create a CSV formatter around an exporter.
    #[must_use]
    pub const fn new(exporter: CsvExporter) -> Self {
        Self { exporter }
    }
}

impl ListingFormatter for CsvFormatter {
    fn format(&self, reservations: &[&Reservation]) -> Result<String> {
        let rendered = self.exporter.render(reservations.iter().copied())?;
        Ok(rendered.trim_end_matches('\n').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::ReservationId;
    use crate::room::Room;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn booking(id: i64, room: &str, hour: u32, name: &str) -> Reservation {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Reservation::from_parts(
            ReservationId::new(id),
            Room::new(room).unwrap(),
            day.and_hms_opt(hour, 0, 0).unwrap(),
            day.and_hms_opt(hour + 1, 0, 0).unwrap(),
            name.into(),
            Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_grouped_format() {
        let a = booking(1, "A", 9, "Sato");
        let b = booking(2, "B", 8, "Ito");
        let formatter = GroupedFormatter::new(RoomCatalog::default(), "会議室");
        let output = formatter.format(&[&b, &a]).unwrap();

        assert_eq!(
            output,
            "会議室A\n  2024/01/15 09:00～2024/01/15 10:00  Sato  (id 1)\n\n\
             会議室B\n  2024/01/15 08:00～2024/01/15 09:00  Ito  (id 2)"
        );
    }

    #[test]
    fn test_grouped_format_one_line_per_booking() {
        let early = booking(1, "A", 9, "Sato");
        let late = booking(2, "A", 13, "Ito");
        let formatter = GroupedFormatter::new(RoomCatalog::default(), "Room ");
        let output = formatter.format(&[&late, &early]).unwrap();

        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            [
                "Room A",
                "  2024/01/15 09:00～2024/01/15 10:00  Sato  (id 1)",
                "  2024/01/15 13:00～2024/01/15 14:00  Ito  (id 2)",
            ]
        );
    }

    #[test]
    fn test_grouped_format_empty() {
        let formatter = GroupedFormatter::new(RoomCatalog::default(), "会議室");
        assert_eq!(formatter.format(&[]).unwrap(), "No reservations.");
    }

    #[test]
    fn test_table_format() {
        let a = booking(1, "A", 9, "Sato");
        let output = TableFormatter.format(&[&a]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "ID\tROOM\tSTART\tEND\tNAME\tCREATED");
        assert!(lines[1].starts_with("1\tA\t2024/01/15 09:00\t2024/01/15 10:00\tSato\t"));
    }

    #[test]
    fn test_json_format_uses_storage_layout() {
        let a = booking(7, "C", 9, "Sato");
        let output = JsonFormatter.format(&[&a]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], 7);
        assert_eq!(parsed[0]["room"], "C");
        assert_eq!(parsed[0]["reserverName"], "Sato");
    }

    #[test]
    fn test_csv_format_matches_export_rows() {
        let a = booking(1, "A", 9, "Sato");
        let output = CsvFormatter::new(CsvExporter::new()).format(&[&a]).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().nth(1).unwrap().starts_with("会議室A,2024/01/15 09:00,"));
    }
}
