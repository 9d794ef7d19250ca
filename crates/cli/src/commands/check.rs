//! `check`: validate INI files.
//!
//! Parses each path directly (no cache) and reports per-file results.
//! Every file is checked even after a failure; the command fails if any did.
//! The reported error is the first malformed file, else the first failure.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use ini_config::{ConfigError, parse_file};

pub fn run(paths: &[PathBuf]) -> Result<()> {
    let mut reported: Option<ConfigError> = None;
    let mut failed = 0usize;

    for path in paths {
        match parse_file(path) {
            Ok(config) => println!(
                "{}: ok ({} sections, {} keys)",
                path.display(),
                config.len(),
                config.key_count()
            ),
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                failed += 1;
                let outranks = reported
                    .as_ref()
                    .is_none_or(|current| e.is_fatal() && !current.is_fatal());
                if outranks {
                    reported = Some(e);
                }
            }
        }
    }

    match reported {
        None => Ok(()),
        Some(e) => Err(anyhow!(e).context(format!(
            "{} of {} file(s) failed validation",
            failed,
            paths.len()
        ))),
    }
}
