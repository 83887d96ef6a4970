//! Library exports for roombook-cli.
//!
//! This module exports the CLI structure so integration tooling can
//! render documentation from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
