//! Shared test utilities for ini-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write INI fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `INI_CONFIG_DIR` and `RUST_LOG` from the host never leak into tests.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a hermetic `ini-cli` command for integration testing.
pub fn ini_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ini-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("INI_CONFIG_DIR").env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `ini-cli` command resolving files in `dir`.
#[allow(dead_code)]
pub fn ini_cmd_in(dir: &Path) -> Command {
    let mut cmd = ini_cmd();
    cmd.env("INI_CONFIG_DIR", dir);
    cmd
}

/// Creates a temporary directory holding `<file_id>.ini` for each fixture.
#[allow(dead_code)]
pub fn fixture_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (file_id, contents) in files {
        fs::write(dir.path().join(format!("{file_id}.ini")), contents).unwrap();
    }
    dir
}

#[allow(dead_code)]
pub const APP_INI: &str = "\
[server]
host = 0.0.0.0 ; all interfaces
port = 8080
workers = lots

[db]
name = main
";
