//! The reservation store.
//!
//! [`ReservationStore`] owns the canonical list of reservations. It reads the
//! list once from a [`BlobStore`] when opened and writes the whole list back
//! after every mutation, so the in-memory list and the persisted mirror never
//! diverge: a failed write rolls the in-memory change back.
//!
//! # Examples
//!
//! ```
//! use roombook::storage::MemoryBlobStore;
//! use roombook::store::ReservationStore;
//! use roombook::{Error, ReservationRequest, RoomCatalog, RoomFilter};
//!
//! let catalog = RoomCatalog::default();
//! let mut store = ReservationStore::with_system_clock(MemoryBlobStore::new()).unwrap();
//!
//! let request = ReservationRequest::new()
//!     .room("A")
//!     .date("2024-01-15")
//!     .start("09:00")
//!     .end("10:00")
//!     .reserver_name("Sato");
//! store.add(request.validate(&catalog).unwrap()).unwrap();
//!
//! // Same slot again is rejected
//! let again = store.add(request.validate(&catalog).unwrap());
//! assert!(matches!(again, Err(Error::Conflict { .. })));
//!
//! assert_eq!(store.list(&RoomFilter::All).len(), 1);
//! ```

mod clock;
mod grouping;

#[cfg(test)]
mod proptests;

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::conflict;
use crate::error::{Error, Result};
use crate::reservation::{Candidate, Reservation, ReservationId, ReservationRequest};
use crate::room::{RoomCatalog, RoomFilter};
use crate::storage::{BlobStore, RESERVATIONS_KEY};

pub use clock::{Clock, FixedClock, SystemClock};
pub use grouping::{group_by_room, RoomGroup};

/// The canonical reservation list, mirrored into a [`BlobStore`].
#[derive(Debug)]
pub struct ReservationStore<S: BlobStore, C: Clock = SystemClock> {
    backend: S,
    clock: C,
    reservations: Vec<Reservation>,
    last_issued: Option<ReservationId>,
}

impl<S: BlobStore> ReservationStore<S> {
    /// Opens a store backed by `backend` that stamps reservations with the
    /// wall clock.
    ///
    /// # Errors
    ///
    /// See [`ReservationStore::open`].
    pub fn with_system_clock(backend: S) -> Result<Self> {
        Self::open(backend, SystemClock)
    }
}

impl<S: BlobStore, C: Clock> ReservationStore<S, C> {
    /// Opens a store, loading the persisted list once.
    ///
    /// A missing, empty or `null` blob yields an empty store. Overlapping
    /// entries in the persisted list are tolerated and logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read, the blob is not a JSON
    /// array of reservations, or it holds an invalid entry or a duplicate id
    /// ([`Error::CorruptData`]).
    pub fn open(backend: S, clock: C) -> Result<Self> {
        let reservations = load(&backend)?;
        let last_issued = reservations.iter().map(Reservation::id).max();
        log::debug!("Loaded {} reservation(s)", reservations.len());

        Ok(Self {
            backend,
            clock,
            reservations,
            last_issued,
        })
    }

    /// Adds a validated booking.
    ///
    /// The booking must not overlap any reservation of the same room. On
    /// success the new reservation gets a fresh id, is appended and the full
    /// list is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] with the first overlapping reservation in
    /// store order, [`Error::CorruptData`] if the stored ids are exhausted,
    /// or a storage error if persisting fails. The store is unchanged in
    /// every case.
    pub fn add(&mut self, candidate: Candidate) -> Result<Reservation> {
        if let Some(existing) = self.find_conflict(&candidate) {
            log::debug!(
                "Rejected booking of room {}: overlaps reservation {}",
                candidate.room(),
                existing.id()
            );
            return Err(Error::Conflict {
                existing: Box::new(existing.clone()),
            });
        }

        let created_at = self.clock.now();
        let id = self.next_id(created_at)?;
        let reservation = Reservation::from_candidate(id, candidate, created_at);

        self.reservations.push(reservation.clone());
        if let Err(e) = self.persist() {
            self.reservations.pop();
            return Err(e);
        }
        self.last_issued = Some(id);

        log::info!(
            "Reserved room {} for {} ({})",
            reservation.room(),
            reservation.reserver_name(),
            reservation.time_range()
        );
        Ok(reservation)
    }

    /// Validates raw form values against `catalog` and adds the result.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`ReservationRequest::validate`] or any
    /// error of [`ReservationStore::add`].
    pub fn submit(
        &mut self,
        request: &ReservationRequest,
        catalog: &RoomCatalog,
    ) -> Result<Reservation> {
        let candidate = request.validate(catalog)?;
        self.add(candidate)
    }

    /// Removes the reservation with `id` and persists the list.
    ///
    /// Returns `None` if no reservation has that id; the list is still
    /// written back.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails; the removed entry is put
    /// back in its old position.
    pub fn remove(&mut self, id: ReservationId) -> Result<Option<Reservation>> {
        let position = self.reservations.iter().position(|r| r.id() == id);
        let removed = position.map(|index| (index, self.reservations.remove(index)));

        if let Err(e) = self.persist() {
            if let Some((index, reservation)) = removed {
                self.reservations.insert(index, reservation);
            }
            return Err(e);
        }

        match &removed {
            Some((_, reservation)) => log::info!(
                "Removed reservation {} in room {}",
                reservation.id(),
                reservation.room()
            ),
            None => log::debug!("No reservation with id {id}"),
        }
        Ok(removed.map(|(_, reservation)| reservation))
    }

    /// Lists reservations passing `filter`, ascending by start time.
    ///
    /// The sort is stable: entries with equal starts keep store order.
    #[must_use]
    pub fn list(&self, filter: &RoomFilter) -> Vec<&Reservation> {
        let mut listed: Vec<&Reservation> = self
            .reservations
            .iter()
            .filter(|r| filter.matches(r.room()))
            .collect();
        listed.sort_by_key(|r| r.start_time());
        listed
    }

    /// Lists reservations passing `filter`, grouped by room.
    ///
    /// See [`group_by_room`] for the group order.
    #[must_use]
    pub fn grouped(&self, filter: &RoomFilter, catalog: &RoomCatalog) -> Vec<RoomGroup<'_>> {
        group_by_room(&self.list(filter), catalog)
    }

    /// Returns the first stored reservation that would conflict with
    /// `candidate`, without adding anything.
    #[must_use]
    pub fn find_conflict(&self, candidate: &Candidate) -> Option<&Reservation> {
        conflict::find_conflict_for(candidate, &self.reservations)
    }

    /// Looks up a reservation by id.
    #[must_use]
    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// Returns all reservations in store (insertion) order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns `true` if nothing is booked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Returns the persistence backend.
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Consumes the store, returning its backend.
    #[must_use]
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn next_id(&self, created_at: DateTime<Utc>) -> Result<ReservationId> {
        let millis = created_at.timestamp_millis();
        match self.last_issued {
            Some(last) if last.value() >= millis => last
                .value()
                .checked_add(1)
                .map(ReservationId::new)
                .ok_or_else(|| Error::CorruptData {
                    details: format!("reservation id {last} leaves no room for a new id"),
                }),
            _ => Ok(ReservationId::new(millis)),
        }
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.reservations)?;
        self.backend.set(RESERVATIONS_KEY, &json)?;
        log::debug!("Persisted {} reservation(s)", self.reservations.len());
        Ok(())
    }
}

fn load<S: BlobStore>(backend: &S) -> Result<Vec<Reservation>> {
    let Some(raw) = backend.get(RESERVATIONS_KEY)? else {
        return Ok(Vec::new());
    };
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Ok(Vec::new());
    }

    let reservations: Vec<Reservation> = serde_json::from_str(raw)?;

    let mut ids = HashSet::with_capacity(reservations.len());
    for reservation in &reservations {
        reservation.check().map_err(|e| Error::CorruptData {
            details: e.to_string(),
        })?;
        if !ids.insert(reservation.id()) {
            return Err(Error::CorruptData {
                details: format!("duplicate reservation id {}", reservation.id()),
            });
        }
    }

    for (index, reservation) in reservations.iter().enumerate() {
        if let Some(earlier) = conflict::find_conflict(
            reservation.room(),
            reservation.start_time(),
            reservation.end_time(),
            &reservations[..index],
        ) {
            log::warn!(
                "Stored reservations {} and {} overlap in room {}",
                earlier.id(),
                reservation.id(),
                reservation.room()
            );
        }
    }

    Ok(reservations)
}
