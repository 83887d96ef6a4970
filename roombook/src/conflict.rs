//! Overlap detection between a proposed booking and existing reservations.

use chrono::NaiveDateTime;

use crate::reservation::{Candidate, Reservation};
use crate::room::Room;

/// Returns the first reservation in `existing` that overlaps `[new_start, new_end)`
/// in the same room.
///
/// Entries are scanned in the order given (store order, not time order), so
/// the reported reservation is the earliest-inserted overlapping one. Touching
/// intervals do not conflict. The caller must have checked
/// `new_start < new_end`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use roombook::conflict::find_conflict;
/// use roombook::{Reservation, ReservationId, Room};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
/// let room = Room::new("A").unwrap();
/// let existing = vec![Reservation::from_parts(
///     ReservationId::new(1), room.clone(), at(9), at(10), "Sato".into(), Utc::now(),
/// ).unwrap()];
///
/// assert!(find_conflict(&room, at(9), at(11), &existing).is_some());
/// assert!(find_conflict(&room, at(10), at(11), &existing).is_none());
/// ```
#[must_use]
pub fn find_conflict<'a, I>(
    room: &Room,
    new_start: NaiveDateTime,
    new_end: NaiveDateTime,
    existing: I,
) -> Option<&'a Reservation>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    existing.into_iter().find(|r| {
        r.room() == room && new_start < r.end_time() && new_end > r.start_time()
    })
}

/// [`find_conflict`] for a validated candidate.
#[must_use]
pub fn find_conflict_for<'a, I>(candidate: &Candidate, existing: I) -> Option<&'a Reservation>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let range = candidate.time_range();
    find_conflict(candidate.room(), range.start(), range.end(), existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::ReservationId;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn booking(id: i64, room: &str, start: NaiveDateTime, end: NaiveDateTime) -> Reservation {
        Reservation::from_parts(
            ReservationId::new(id),
            Room::new(room).unwrap(),
            start,
            end,
            "Sato".into(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_no_reservations_no_conflict() {
        let room = Room::new("A").unwrap();
        let existing: Vec<Reservation> = Vec::new();
        assert!(find_conflict(&room, at(9, 0), at(10, 0), &existing).is_none());
    }

    #[test]
    fn test_touching_intervals_do_not_conflict() {
        let existing = vec![booking(1, "A", at(9, 0), at(10, 0))];
        let room = Room::new("A").unwrap();
        assert!(find_conflict(&room, at(10, 0), at(11, 0), &existing).is_none());
        assert!(find_conflict(&room, at(8, 0), at(9, 0), &existing).is_none());
    }

    #[test]
    fn test_containment_and_partial_overlap_conflict() {
        let existing = vec![booking(1, "A", at(9, 0), at(10, 0))];
        let room = Room::new("A").unwrap();
        assert!(find_conflict(&room, at(9, 15), at(9, 45), &existing).is_some());
        assert!(find_conflict(&room, at(8, 0), at(11, 0), &existing).is_some());
        assert!(find_conflict(&room, at(9, 59), at(10, 30), &existing).is_some());
    }

    #[test]
    fn test_other_rooms_ignored() {
        let existing = vec![booking(1, "B", at(9, 0), at(10, 0))];
        let room = Room::new("A").unwrap();
        assert!(find_conflict(&room, at(9, 0), at(10, 0), &existing).is_none());
    }

    #[test]
    fn test_first_match_in_given_order() {
        // Inserted out of time order: the later slot was booked first
        let existing = vec![
            booking(1, "A", at(10, 0), at(11, 0)),
            booking(2, "A", at(9, 0), at(10, 0)),
        ];
        let room = Room::new("A").unwrap();
        let hit = find_conflict(&room, at(9, 30), at(10, 30), &existing).unwrap();
        assert_eq!(hit.id(), ReservationId::new(1));
    }
}
