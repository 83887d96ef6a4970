//! Common test utilities for integration tests.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tempfile::TempDir;

use roombook::storage::{SqliteBlobStore, StorageConfig};
use roombook::store::{FixedClock, ReservationStore};
use roombook::{Candidate, Room};

/// The day all fixtures book on.
#[allow(dead_code)]
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// A local timestamp on the fixture day.
#[allow(dead_code)]
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, minute, 0).unwrap()
}

/// The instant fixtures are created at.
#[allow(dead_code)]
pub fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 14, 3, 0, 0).unwrap()
}

/// A validated booking for `room` by Sato.
#[allow(dead_code)]
pub fn candidate(room: &str, start: NaiveDateTime, end: NaiveDateTime) -> Candidate {
    Candidate::new(Room::new(room).unwrap(), start, end, "Sato").unwrap()
}

/// A sqlite-backed store in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
#[allow(dead_code)]
pub fn sqlite_store() -> (TempDir, ReservationStore<SqliteBlobStore, FixedClock>) {
    let dir = tempfile::tempdir().unwrap();
    let store = reopen(&dir);
    (dir, store)
}

/// Opens the sqlite store living in `dir`.
#[allow(dead_code)]
pub fn reopen(dir: &TempDir) -> ReservationStore<SqliteBlobStore, FixedClock> {
    let blobs = SqliteBlobStore::open(StorageConfig::new(dir.path().join("roombook.db"))).unwrap();
    ReservationStore::open(blobs, FixedClock::new(created())).unwrap()
}
