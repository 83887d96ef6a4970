//! Add command implementation.
//!
//! This module implements the `add` command, which books a room. The slot is
//! given either as `--date` plus `HH:MM` times, or as two full
//! `YYYY-MM-DDTHH:MM` timestamps.

use crate::error::CliError;
use crate::utils::{catalog, load_configuration, open_store, GlobalOptions};
use clap::Args;
use roombook::ReservationRequest;

/// Book a room for a time slot.
#[derive(Args)]
pub struct AddCommand {
    /// Room to book
    #[arg(long, value_name = "ROOM")]
    pub room: Option<String>,

    /// Day of the booking (YYYY-MM-DD); makes --start/--end times of day
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Start time (HH:MM with --date, otherwise YYYY-MM-DDTHH:MM)
    #[arg(long, value_name = "TIME")]
    pub start: Option<String>,

    /// End time (HH:MM with --date, otherwise YYYY-MM-DDTHH:MM)
    #[arg(long, value_name = "TIME")]
    pub end: Option<String>,

    /// Name of the person booking
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

impl AddCommand {
    /// Build the raw request from the given flags.
    fn request(&self) -> ReservationRequest {
        let mut request = ReservationRequest::new();
        if let Some(ref room) = self.room {
            request = request.room(room.as_str());
        }
        if let Some(ref date) = self.date {
            request = request.date(date.as_str());
        }
        if let Some(ref start) = self.start {
            request = request.start(start.as_str());
        }
        if let Some(ref end) = self.end {
            request = request.end(end.as_str());
        }
        if let Some(ref name) = self.name {
            request = request.reserver_name(name.as_str());
        }
        request
    }

    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = catalog(&config)?;
        let mut store = open_store(global, &config)?;

        let reservation = store.submit(&self.request(), &catalog)?;

        // The id goes to stdout so scripts can capture it
        println!("{}", reservation.id());

        if !global.quiet {
            eprintln!(
                "Booked {}{} {} for {}",
                config.room_label(),
                reservation.room(),
                reservation.time_range(),
                reservation.reserver_name()
            );
        }

        Ok(())
    }
}
