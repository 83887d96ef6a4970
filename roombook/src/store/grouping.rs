//! Per-room grouping of a sorted reservation listing.

use std::collections::BTreeMap;

use crate::reservation::Reservation;
use crate::room::{Room, RoomCatalog};

/// The reservations of one room, sorted by start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGroup<'a> {
    /// The room all entries belong to.
    pub room: &'a Room,
    /// Entries in ascending start order.
    pub reservations: Vec<&'a Reservation>,
}

/// Splits an already sorted listing into per-room groups.
///
/// Groups follow catalog order; rooms outside the catalog come last in
/// lexicographic order. Empty groups are never produced. Order within a group
/// is the order of `sorted`.
#[must_use]
pub fn group_by_room<'a>(sorted: &[&'a Reservation], catalog: &RoomCatalog) -> Vec<RoomGroup<'a>> {
    let unlisted = catalog.rooms().len();
    let mut groups: BTreeMap<(usize, &'a Room), Vec<&'a Reservation>> = BTreeMap::new();

    for &reservation in sorted {
        let room = reservation.room();
        let rank = catalog.position(room).unwrap_or(unlisted);
        groups.entry((rank, room)).or_default().push(reservation);
    }

    groups
        .into_iter()
        .map(|((_, room), reservations)| RoomGroup { room, reservations })
        .collect()
}
