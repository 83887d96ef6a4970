//! Command to show the configured rooms.

use crate::error::CliError;
use crate::utils::{catalog, load_configuration, GlobalOptions};
use clap::Args;

/// Show the configured rooms.
#[derive(Args)]
pub struct RoomsCommand {
    /// Print the display label next to each room id
    #[arg(long)]
    pub labels: bool,
}

impl RoomsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = catalog(&config)?;

        for room in catalog.rooms() {
            if self.labels {
                println!("{room}\t{}{room}", config.room_label());
            } else {
                println!("{room}");
            }
        }
        Ok(())
    }
}
