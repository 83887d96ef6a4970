//! Export command implementation.
//!
//! This module implements the `export` command, which writes the bookings
//! (optionally narrowed to one room) to a dated CSV file.

use crate::error::CliError;
use crate::utils::{catalog, load_configuration, open_store, room_filter, GlobalOptions};
use chrono::Local;
use clap::Args;
use roombook::output::export_file_name;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Export bookings to CSV.
#[derive(Args)]
pub struct ExportCommand {
    /// Only export bookings for this room
    #[arg(long, value_name = "ROOM")]
    pub room: Option<String>,

    /// Directory to write the CSV file into (default: current directory)
    #[arg(long, value_name = "DIR", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = catalog(&config)?;
        let filter = room_filter(self.room.as_deref(), &catalog)?;
        let exporter = config.csv_exporter()?;
        let store = open_store(global, &config)?;

        // Rows stay in insertion order
        let rows = store
            .reservations()
            .iter()
            .filter(|r| filter.matches(r.room()));
        let csv = exporter.export(rows)?;

        if self.stdout {
            let mut stdout = io::stdout().lock();
            stdout.write_all(csv.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }

        let dir = match self.output {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        if !dir.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "output directory {} does not exist",
                dir.display()
            )));
        }

        let path = dir.join(export_file_name(Local::now().date_naive(), &filter));
        fs::write(&path, csv)?;

        println!("{}", path.display());
        if !global.quiet {
            eprintln!("Exported reservations to {}", path.display());
        }

        Ok(())
    }
}
