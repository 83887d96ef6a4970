//! The key-value seam between the reservation store and its backing storage.

use std::collections::HashMap;

use crate::error::Result;

/// A key-value store holding opaque text blobs.
///
/// Values are overwritten wholesale; there are no partial updates.
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore {
    /// Reads the blob stored under `key`, or `None` if it was never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// An in-memory [`BlobStore`].
///
/// # Examples
///
/// ```
/// use roombook::storage::{BlobStore, MemoryBlobStore};
///
/// let mut blobs = MemoryBlobStore::new();
/// assert!(blobs.get("k").unwrap().is_none());
/// blobs.set("k", "v").unwrap();
/// assert_eq!(blobs.get("k").unwrap().as_deref(), Some("v"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one blob.
    #[must_use]
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), value.into());
        Self { blobs, writes: 0 }
    }

    /// Number of `set` calls served so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

impl<T: BlobStore + ?Sized> BlobStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
