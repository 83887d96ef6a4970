//! Schema setup and version checks for the `SQLite` backend.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_BLOBS_TABLE, CREATE_METADATA_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION,
    METADATA_TABLE_EXISTS, SELECT_SCHEMA_VERSION,
};

/// Creates the tables and stamps the current schema version, atomically.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use roombook::storage::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(CREATE_METADATA_TABLE, [])?;
    tx.execute(CREATE_BLOBS_TABLE, [])?;
    tx.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()])?;
    tx.commit()?;
    log::debug!("initialized schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Reads the stored schema version; 0 means the database is blank.
///
/// # Errors
///
/// Returns a storage error if a query fails and [`Error::CorruptData`] if
/// the stored version is not a number.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let has_metadata: bool = conn.query_row(METADATA_TABLE_EXISTS, [], |row| row.get(0))?;
    if !has_metadata {
        return Ok(0);
    }

    let stored: Option<String> = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;

    stored.map_or(Ok(0), |text| {
        text.trim().parse().map_err(|_| Error::CorruptData {
            details: format!("schema version '{text}' is not a number"),
        })
    })
}

/// Initializes a blank database or verifies an existing one.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] if the stored version differs
/// from [`CURRENT_SCHEMA_VERSION`], or a storage error if a query fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    match get_schema_version(conn)? {
        0 => initialize_schema(conn),
        CURRENT_SCHEMA_VERSION => Ok(()),
        found => Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    fn set_version(conn: &Connection, value: &str) {
        conn.execute(
            "UPDATE metadata SET value = ?1 WHERE key = 'schema_version'",
            [value],
        )
        .unwrap();
    }

    #[test]
    fn test_blank_database_is_version_zero() {
        assert_eq!(get_schema_version(&blank()).unwrap(), 0);
    }

    #[test]
    fn test_metadata_without_version_row_is_zero() {
        let conn = blank();
        conn.execute(CREATE_METADATA_TABLE, []).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_initialize_creates_empty_blob_table() {
        let conn = blank();
        initialize_schema(&conn).unwrap();

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM blobs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_compatibility_check_is_idempotent() {
        let conn = blank();
        check_schema_compatibility(&conn).unwrap();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_other_version_rejected() {
        let conn = blank();
        initialize_schema(&conn).unwrap();
        set_version(&conn, "2");

        assert!(matches!(
            check_schema_compatibility(&conn),
            Err(Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 2
            })
        ));
    }

    #[test]
    fn test_garbled_version_is_corrupt() {
        let conn = blank();
        initialize_schema(&conn).unwrap();
        set_version(&conn, "one");

        assert!(matches!(
            get_schema_version(&conn),
            Err(Error::CorruptData { .. })
        ));
    }
}
