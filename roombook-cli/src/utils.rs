//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, opening the
//! reservation store and resolving room filters.

use crate::error::CliError;
use roombook::storage::{default_data_dir, resolve_database_path};
use roombook::{
    Config, ConfigBuilder, ReservationStore, RoomCatalog, RoomFilter, SqliteBlobStore,
    StorageConfig,
};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Resolve the data directory: `--data-dir` (or `ROOMBOOK_DATA_DIR`), else
/// `~/.roombook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|_| CliError::NoDataDirectory),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project `roombook.yaml`
/// 3. User `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the reservation store.
///
/// The busy timeout comes from `--busy-timeout` when given, otherwise from
/// the configuration.
pub fn open_store(
    global: &GlobalOptions,
    config: &Config,
) -> Result<ReservationStore<SqliteBlobStore>, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let db_path = resolve_database_path(Some(data_dir.as_path()))?;

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |secs| Duration::from_secs(secs.into()));
    let storage = StorageConfig::new(db_path).with_busy_timeout(busy_timeout);

    let blobs = SqliteBlobStore::open(storage)?;
    Ok(ReservationStore::with_system_clock(blobs)?)
}

/// Load the room catalog from the configuration.
pub fn catalog(config: &Config) -> Result<RoomCatalog, CliError> {
    config
        .catalog()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Turn an optional `--room` value into a filter over the catalog.
pub fn room_filter(room: Option<&str>, catalog: &RoomCatalog) -> Result<RoomFilter, CliError> {
    match room {
        Some(id) => Ok(RoomFilter::Room(catalog.resolve(id)?)),
        None => Ok(RoomFilter::All),
    }
}
