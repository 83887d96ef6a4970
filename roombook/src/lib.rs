#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roombook
//!
//! A library for booking meeting rooms.
//!
//! Bookings are half-open intervals of local wall-clock time. A room can
//! never hold two overlapping bookings; bookings that merely touch are fine.
//! The reservation list lives in memory and is mirrored, whole, into a
//! key-value blob store after every change.
//!
//! ## Core Types
//!
//! - [`ReservationRequest`] and [`Candidate`]: raw form values and their
//!   validated form
//! - [`Reservation`], [`ReservationId`] and [`TimeRange`]: stored bookings
//! - [`Room`], [`RoomCatalog`] and [`RoomFilter`]: bookable rooms
//! - [`ReservationStore`]: add, remove, list and group bookings
//! - [`conflict::find_conflict`]: the overlap check
//! - [`output::CsvExporter`]: CSV export
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roombook::storage::MemoryBlobStore;
//! use roombook::{ReservationRequest, ReservationStore, RoomCatalog, RoomFilter};
//!
//! let catalog = RoomCatalog::default();
//! let mut store = ReservationStore::with_system_clock(MemoryBlobStore::new()).unwrap();
//!
//! for (start, end) in [("09:00", "10:00"), ("10:00", "11:00")] {
//!     let request = ReservationRequest::new()
//!         .room("A")
//!         .date("2024-01-15")
//!         .start(start)
//!         .end(end)
//!         .reserver_name("Sato");
//!     store.submit(&request, &catalog).unwrap();
//! }
//!
//! let overlapping = ReservationRequest::new()
//!     .room("A")
//!     .date("2024-01-15")
//!     .start("09:30")
//!     .end("10:30")
//!     .reserver_name("Ito");
//! let err = store.submit(&overlapping, &catalog).unwrap_err();
//! assert!(err.to_string().contains("2024/01/15 09:00～2024/01/15 10:00"));
//!
//! assert_eq!(store.list(&RoomFilter::All).len(), 2);
//! ```

pub mod config;
pub mod conflict;
pub mod error;
pub mod logging;
pub mod output;
pub mod reservation;
pub mod room;
pub mod storage;
pub mod store;
pub mod timefmt;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{CsvExporter, OutputFormat};
pub use reservation::{Candidate, Reservation, ReservationId, ReservationRequest, TimeRange};
pub use room::{Room, RoomCatalog, RoomFilter};
pub use storage::{BlobStore, MemoryBlobStore, SqliteBlobStore, StorageConfig};
pub use store::{ReservationStore, RoomGroup};
