//! Property-based tests for reservation types.

use super::{Candidate, Reservation, ReservationId, TimeRange};
use crate::room::Room;
use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use proptest::prelude::*;

// Minute offsets within a single week, second precision
fn timestamp_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..7 * 24 * 60 * 60).prop_map(|secs| {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::seconds(secs)
    })
}

fn room_strategy() -> impl Strategy<Value = Room> {
    "[A-Z][0-9]{0,2}".prop_map(|id| Room::new(id).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A range is constructible exactly when start < end
    #[test]
    fn time_range_requires_strict_order(a in timestamp_strategy(), b in timestamp_strategy()) {
        prop_assert_eq!(TimeRange::new(a, b).is_ok(), a < b);
    }

    // Overlap is symmetric
    #[test]
    fn overlap_is_symmetric(
        a in timestamp_strategy(),
        len_a in 1i64..36_000,
        b in timestamp_strategy(),
        len_b in 1i64..36_000
    ) {
        let x = TimeRange::new(a, a + Duration::seconds(len_a)).unwrap();
        let y = TimeRange::new(b, b + Duration::seconds(len_b)).unwrap();
        prop_assert_eq!(x.overlaps(&y), y.overlaps(&x));
    }

    // A range starting where another ends never overlaps it
    #[test]
    fn touching_ranges_never_overlap(a in timestamp_strategy(), len_a in 1i64..36_000, len_b in 1i64..36_000) {
        let mid = a + Duration::seconds(len_a);
        let first = TimeRange::new(a, mid).unwrap();
        let second = TimeRange::new(mid, mid + Duration::seconds(len_b)).unwrap();
        prop_assert!(!first.overlaps(&second));
    }

    // Candidates keep the requested values
    #[test]
    fn candidate_preserves_fields(room in room_strategy(), a in timestamp_strategy(), len in 1i64..36_000, name in "[a-z]{1,12}") {
        let end = a + Duration::seconds(len);
        let padded = format!("  {name}  ");
        let candidate = Candidate::new(room.clone(), a, end, padded).unwrap();
        prop_assert_eq!(candidate.room(), &room);
        prop_assert_eq!(candidate.time_range().start(), a);
        prop_assert_eq!(candidate.reserver_name(), name.as_str());
    }

    // Reservation serialization round-trips
    #[test]
    fn reservation_serialization_roundtrip(
        id in 1i64..i64::from(u32::MAX),
        room in room_strategy(),
        a in timestamp_strategy(),
        len in 1i64..36_000,
        name in "[a-zA-Z ]{0,8}[a-zA-Z]",
        created in 0i64..2_000_000_000
    ) {
        let reservation = Reservation::from_parts(
            ReservationId::new(id),
            room,
            a,
            a + Duration::seconds(len),
            name,
            Utc.timestamp_opt(created, 0).unwrap(),
        )
        .unwrap();

        let json = serde_json::to_string(&reservation).unwrap();
        let deserialized: Reservation = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized, reservation);
    }
}
