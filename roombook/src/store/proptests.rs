//! Property-based tests for the reservation store.
//!
//! These check the conflict rule end to end: whatever sequence of bookings is
//! attempted, the stored set never holds two overlapping reservations in the
//! same room, and an add is accepted exactly when no overlap exists.

use super::{FixedClock, ReservationStore};
use crate::reservation::Candidate;
use crate::room::{Room, RoomFilter};
use crate::storage::MemoryBlobStore;
use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn store() -> ReservationStore<MemoryBlobStore, FixedClock> {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap());
    ReservationStore::open(MemoryBlobStore::new(), clock).unwrap()
}

// (room index, start offset in 15-minute slots, length in slots)
fn booking_strategy() -> impl Strategy<Value = (usize, i64, i64)> {
    (0usize..3, 0i64..40, 1i64..8)
}

fn to_candidate((room, offset, len): (usize, i64, i64)) -> Candidate {
    let start = base() + Duration::minutes(offset * 15);
    let end = start + Duration::minutes(len * 15);
    Candidate::new(Room::new(["A", "B", "C"][room]).unwrap(), start, end, "Sato").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Adding B after A in the same room succeeds iff B starts at or after A ends
    #[test]
    fn same_room_add_succeeds_iff_no_overlap(
        a_offset in 0i64..40,
        a_len in 1i64..8,
        gap in 1i64..48,
        b_len in 1i64..8
    ) {
        let mut store = store();
        let a = to_candidate((0, a_offset, a_len));
        let b = to_candidate((0, a_offset + gap, b_len));
        store.add(a.clone()).unwrap();

        let result = store.add(b.clone());
        let expected_ok = b.time_range().start() >= a.time_range().end();
        prop_assert_eq!(result.is_ok(), expected_ok);
    }

    // The stored set never contains two overlapping same-room reservations
    #[test]
    fn stored_set_is_conflict_free(bookings in prop::collection::vec(booking_strategy(), 1..30)) {
        let mut store = store();
        for booking in bookings {
            let candidate = to_candidate(booking);
            let conflict_before = store.find_conflict(&candidate).is_some();
            let accepted = store.add(candidate).is_ok();
            prop_assert_eq!(accepted, !conflict_before);
        }

        let stored = store.reservations();
        for (i, x) in stored.iter().enumerate() {
            for y in &stored[i + 1..] {
                prop_assert!(x.room() != y.room() || !x.time_range().overlaps(&y.time_range()));
            }
        }
    }

    // Bookings in one room never affect another room
    #[test]
    fn rooms_are_independent(offset in 0i64..40, len in 1i64..8) {
        let mut store = store();
        for room in 0..3 {
            prop_assert!(store.add(to_candidate((room, offset, len))).is_ok());
        }
        prop_assert_eq!(store.len(), 3);
    }

    // Filtered listings hold only the room and are sorted by start
    #[test]
    fn filtered_list_is_sorted(bookings in prop::collection::vec(booking_strategy(), 0..30), room in 0usize..3) {
        let mut store = store();
        for booking in bookings {
            let _ = store.add(to_candidate(booking));
        }

        let wanted = Room::new(["A", "B", "C"][room]).unwrap();
        let listed = store.list(&RoomFilter::Room(wanted.clone()));
        prop_assert!(listed.iter().all(|r| r.room() == &wanted));
        prop_assert!(listed.windows(2).all(|w| w[0].start_time() <= w[1].start_time()));
        prop_assert_eq!(
            listed.len(),
            store.reservations().iter().filter(|r| r.room() == &wanted).count()
        );
    }

    // Reopening from the persisted blob reproduces the same reservations
    #[test]
    fn reopen_reproduces_reservations(bookings in prop::collection::vec(booking_strategy(), 0..20)) {
        let mut store = store();
        for booking in bookings {
            let _ = store.add(to_candidate(booking));
        }
        let expected = store.reservations().to_vec();

        let reopened = ReservationStore::with_system_clock(store.into_backend()).unwrap();
        prop_assert_eq!(reopened.reservations(), expected.as_slice());
    }
}
