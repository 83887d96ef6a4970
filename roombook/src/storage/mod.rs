//! Persistence layer for the reservation list.
//!
//! The store treats persistence as an opaque key-value blob store: the whole
//! reservation list is serialized to JSON and written under a single key after
//! every mutation. Two backends are provided:
//!
//! - [`SqliteBlobStore`]: a small `SQLite` file with a versioned schema
//! - [`MemoryBlobStore`]: a `HashMap`, for tests and embedding
//!
//! # Examples
//!
//! ```no_run
//! use roombook::storage::{BlobStore, SqliteBlobStore, StorageConfig};
//!
//! let config = StorageConfig::new("/tmp/roombook.db");
//! let mut blobs = SqliteBlobStore::open(config).unwrap();
//! blobs.set("reservations", "[]").unwrap();
//! assert_eq!(blobs.get("reservations").unwrap().as_deref(), Some("[]"));
//! ```

mod blob;
mod config;
pub mod migrations;
mod schema;
mod sqlite;

pub use blob::{BlobStore, MemoryBlobStore};
#[cfg(test)]
pub(crate) use blob::MockBlobStore;
pub use config::{default_data_dir, resolve_database_path, StorageConfig};
pub use sqlite::SqliteBlobStore;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};

/// Key under which the reservation list is stored.
pub const RESERVATIONS_KEY: &str = "reservations";
