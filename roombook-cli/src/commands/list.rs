//! List command implementation.
//!
//! This module implements the `list` command, which displays bookings
//! sorted by start time, grouped per room by default.

use crate::error::CliError;
use crate::utils::{catalog, load_configuration, open_store, room_filter, GlobalOptions};
use clap::{Args, ValueEnum};
use roombook::output::{CsvFormatter, ListingFormatter};
use roombook::OutputFormat;

/// List bookings.
#[derive(Args)]
pub struct ListCommand {
    /// Only show bookings for this room
    #[arg(long, value_name = "ROOM")]
    pub room: Option<String>,

    /// Output format (default: from configuration, else grouped)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

/// Output format for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One section per room, in catalog order
    Grouped,
    /// Tab-separated table
    Table,
    /// JSON array
    Json,
    /// CSV in the export layout
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Grouped => OutputFormat::Grouped,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = catalog(&config)?;
        let filter = room_filter(self.room.as_deref(), &catalog)?;
        let store = open_store(global, &config)?;

        let format = self
            .format
            .map_or_else(|| config.output_format(), OutputFormat::from);

        // CSV listings share the export's configured time zone
        let formatter: Box<dyn ListingFormatter> = match format {
            OutputFormat::Csv => Box::new(CsvFormatter::new(config.csv_exporter()?)),
            other => other.create_formatter(&catalog, config.room_label()),
        };

        let output = formatter.format(&store.list(&filter))?;
        println!("{output}");

        Ok(())
    }
}
