//! Integration tests for listing formats and CSV export.

mod common;

use chrono::FixedOffset;

use common::{at, candidate, day, sqlite_store};

use roombook::config::{Config, ConfigBuilder};
use roombook::output::{export_file_name, CsvExporter};
use roombook::{Error, OutputFormat, Room, RoomFilter};

fn jst() -> CsvExporter {
    CsvExporter::new().with_utc_offset(FixedOffset::east_opt(9 * 3600).unwrap())
}

#[test]
fn test_single_reservation_export() {
    let (_dir, mut store) = sqlite_store();
    store.add(candidate("A", at(9, 0), at(10, 0))).unwrap();

    let csv = jst().export(store.reservations()).unwrap();
    assert_eq!(
        csv,
        "会議室,利用開始日時,利用終了日時,予約者名,予約日時\n\
         会議室A,2024/01/15 09:00,2024/01/15 10:00,Sato,2024/01/14 12:00\n"
    );
}

#[test]
fn test_empty_store_has_nothing_to_export() {
    let (_dir, store) = sqlite_store();
    let err = jst().export(store.reservations()).unwrap_err();
    assert!(matches!(err, Error::NothingToExport));
    assert!(err.is_rejection());
}

#[test]
fn test_filtered_export_only_holds_room() {
    let (_dir, mut store) = sqlite_store();
    store.add(candidate("A", at(9, 0), at(10, 0))).unwrap();
    store.add(candidate("B", at(9, 0), at(10, 0))).unwrap();

    let filter = RoomFilter::Room(Room::new("B").unwrap());
    let rows: Vec<_> = store
        .reservations()
        .iter()
        .filter(|r| filter.matches(r.room()))
        .collect();
    let csv = jst().export(rows).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).unwrap().starts_with("会議室B,"));
    assert_eq!(export_file_name(day(), &filter), "reservations_20240115_roomB.csv");
}

#[test]
fn test_configured_exporter() {
    let (_dir, mut store) = sqlite_store();
    store.add(candidate("A", at(9, 0), at(10, 0))).unwrap();

    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            room_label: Some("Room ".into()),
            csv_utc_offset_minutes: Some(0),
            ..Default::default()
        })
        .build()
        .unwrap();

    let csv = config.csv_exporter().unwrap().export(store.reservations()).unwrap();
    assert_eq!(
        csv.lines().nth(1).unwrap(),
        "Room A,2024/01/15 09:00,2024/01/15 10:00,Sato,2024/01/14 03:00"
    );
}

#[test]
fn test_grouped_listing_headers() {
    let (_dir, mut store) = sqlite_store();
    store.add(candidate("B", at(9, 0), at(10, 0))).unwrap();
    store.add(candidate("A", at(11, 0), at(12, 0))).unwrap();

    let config = Config::default();
    let formatter = OutputFormat::Grouped.create_formatter(&config.catalog().unwrap(), config.room_label());
    let output = formatter.format(&store.list(&RoomFilter::All)).unwrap();

    let headers: Vec<&str> = output.lines().filter(|l| !l.starts_with(' ') && !l.is_empty()).collect();
    assert_eq!(headers, ["会議室A", "会議室B"]);
}
