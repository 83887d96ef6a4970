//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const ISOLATED_VARS: [&str; 8] = [
    "ROOMBOOK_DATA_DIR",
    "ROOMBOOK_BUSY_TIMEOUT",
    "ROOMBOOK_LOG_MODE",
    "ROOMBOOK_ROOMS",
    "ROOMBOOK_ROOM_LABEL",
    "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "ROOMBOOK_OUTPUT_FORMAT",
    "ROOMBOOK_CSV_UTC_OFFSET_MINUTES",
];

/// Test environment with isolated data directory.
///
/// Commands run with the temporary directory as working directory, so a
/// `roombook.yaml` written there is picked up as project configuration.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the roombook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; roombook creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("roombook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a project `roombook.yaml` into the working directory.
    pub fn write_project_config(&self, yaml: &str) {
        std::fs::write(self.temp_path.join("roombook.yaml"), yaml)
            .expect("Failed to write project config");
    }

    /// Book `room` on 2024-01-15 and return the new id.
    ///
    /// # Panics
    /// Panics if the add command fails or doesn't print an id.
    pub fn add(&self, room: &str, start: &str, end: &str, name: &str) -> i64 {
        let output = self
            .command()
            .args(["add", "--room", room, "--date", "2024-01-15"])
            .args(["--start", start, "--end", end, "--name", name])
            .output()
            .expect("Failed to run add command");

        assert!(
            output.status.success(),
            "Add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .parse()
            .expect("Output is not a reservation id")
    }

    /// Run `list` with extra arguments and return stdout.
    pub fn list(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("list")
            .args(args)
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
