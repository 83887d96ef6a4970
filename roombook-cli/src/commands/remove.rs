//! Remove command implementation.
//!
//! This module implements the `remove` command, which cancels a booking by
//! id after asking for confirmation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use roombook::ReservationId;
use std::io::{self, BufRead, Write};

/// Cancel a booking by id.
#[derive(Args)]
pub struct RemoveCommand {
    /// Id of the booking to cancel
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;
        let id = ReservationId::new(self.id);

        let Some(existing) = store.get(id) else {
            if !global.quiet {
                eprintln!("No reservation with id {id} (already removed)");
            }
            return Ok(());
        };

        if !self.yes {
            let prompt = format!(
                "Remove reservation {id} ({}{} {} by {})? [y/N] ",
                config.room_label(),
                existing.room(),
                existing.time_range(),
                existing.reserver_name()
            );
            if !confirm(&prompt, io::stdin().lock())? {
                if !global.quiet {
                    eprintln!("Cancelled");
                }
                return Ok(());
            }
        }

        if store.remove(id)?.is_some() && !global.quiet {
            eprintln!("Removed reservation {id}");
        }

        Ok(())
    }
}

/// Ask on stderr and read one answer line; only `y`/`yes` confirm.
fn confirm(prompt: &str, mut input: impl BufRead) -> Result<bool, CliError> {
    eprint!("{prompt}");
    io::stderr().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
