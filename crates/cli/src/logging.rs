//! Diagnostic logging setup.
//!
//! Responsibilities:
//! - Define the explicit set of log levels accepted on the command line.
//! - Install the tracing subscriber writing to stderr.
//! - Load `.env` before argument parsing so clap env defaults can read it.
//!
//! Invariants:
//! - Diagnostics never go to stdout; stdout carries only command output.
//! - `RUST_LOG`, when set and valid, takes precedence over `--log-level`.
//! - Dotenv errors NEVER include raw .env line contents.

use anyhow::{Result, bail};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Severity threshold for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub const fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from `.env` if present.
///
/// Skipped when `DOTENV_DISABLED` is "true" or "1". A missing file is not an error.
pub fn load_dotenv() -> Result<()> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => bail!(
            "Failed to parse .env file at position {}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
            idx
        ),
        Err(dotenvy::Error::Io(io_err)) => bail!("Failed to read .env file: {}", io_err.kind()),
        Err(_) => bail!("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_are_valid_filters() {
        for level in [
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Info,
            LogLevel::Debug,
        ] {
            assert!(EnvFilter::try_new(level.as_directive()).is_ok());
        }
    }

    #[test]
    fn test_warning_maps_to_warn() {
        assert_eq!(LogLevel::Warning.as_directive(), "warn");
    }
}
