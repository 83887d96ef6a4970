//! `SQLite`-backed blob store.

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::error::Result;

use super::blob::BlobStore;
use super::config::StorageConfig;
use super::schema::{SELECT_BLOB, UPSERT_BLOB};

/// A [`BlobStore`] kept in a single `SQLite` file.
///
/// Opening applies WAL journaling and the configured busy timeout, then
/// checks (or initializes) the schema.
///
/// # Examples
///
/// ```no_run
/// use roombook::storage::{SqliteBlobStore, StorageConfig};
///
/// let blobs = SqliteBlobStore::open(StorageConfig::new("/tmp/roombook.db")).unwrap();
/// ```
#[derive(Debug)]
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Opens (and if allowed, creates) the database.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The database file cannot be opened
    /// - PRAGMA settings cannot be applied
    /// - The schema version is unsupported
    pub fn open(config: StorageConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if config.auto_create {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.busy_timeout(config.busy_timeout)?;

        super::migrations::check_schema_compatibility(&conn)?;
        log::debug!("opened blob store at {}", config.path.display());

        Ok(Self { conn })
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_BLOB, [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(UPSERT_BLOB, params![key, value, now])?;
        Ok(())
    }
}
