//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `add`: Book a room for a time slot
//! - `remove`: Cancel a booking by id
//! - `list`: List bookings in one of several formats
//! - `export`: Write bookings to a CSV file
//! - `rooms`: Show the configured rooms
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod completions;
pub mod export;
pub mod list;
pub mod remove;
pub mod rooms;
pub mod show_data_dir;

pub use add::AddCommand;
pub use completions::CompletionsCommand;
pub use export::ExportCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use rooms::RoomsCommand;
pub use show_data_dir::ShowDataDirCommand;
