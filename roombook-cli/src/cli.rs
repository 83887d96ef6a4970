//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CompletionsCommand, ExportCommand, ListCommand, RemoveCommand, RoomsCommand,
    ShowDataDirCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking meeting rooms.
#[derive(Parser)]
#[command(name = "roombook")]
#[command(version, about = "Book meeting rooms without double-booking", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "ROOMBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a room for a time slot
    Add(AddCommand),

    /// Cancel a booking by id
    Remove(RemoveCommand),

    /// List bookings
    List(ListCommand),

    /// Export bookings to CSV
    Export(ExportCommand),

    /// Show the configured rooms
    Rooms(RoomsCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_date() {
        let cli = Cli::try_parse_from([
            "roombook", "add", "--room", "A", "--date", "2024-01-15", "--start", "09:00",
            "--end", "10:00", "--name", "Sato",
        ])
        .unwrap();
        match cli.command {
            Command::Add(cmd) => {
                assert_eq!(cmd.room.as_deref(), Some("A"));
                assert_eq!(cmd.date.as_deref(), Some("2024-01-15"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_export_output_conflicts_with_stdout() {
        let result = Cli::try_parse_from(["roombook", "export", "--stdout", "--output", "/tmp"]);
        assert!(result.is_err());
    }
}
