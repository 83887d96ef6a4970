//! Build script for roombook-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("roombook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book meeting rooms without double-booking")
        .long_about(
            "Command-line tool for booking meeting rooms. A room never holds two \
             overlapping bookings; bookings that only touch are allowed.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ROOMBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("ROOMBOOK_BUSY_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("add")
                .about("Book a room for a time slot")
                .long_about("Book a room; fails if the slot overlaps an existing booking"),
            Command::new("remove")
                .about("Cancel a booking by id")
                .long_about("Cancel a booking after confirmation (skip with --yes)"),
            Command::new("list")
                .about("List bookings")
                .long_about("List bookings sorted by start time, grouped per room by default"),
            Command::new("export")
                .about("Export bookings to CSV")
                .long_about("Write bookings to reservations_YYYYMMDD[_roomX].csv"),
            Command::new("rooms")
                .about("Show the configured rooms")
                .long_about("Print the room catalog in configured order"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the roombook data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("roombook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
