//! `get`: resolve a single value.
//!
//! Responsibilities:
//! - Resolve a bare key (with `--file`/`--section`) or a dotted address.
//! - Print the value, or the `--default` when the lookup misses.
//!
//! Invariants:
//! - A malformed file, an invalid address, or a non-numeric value under
//!   `--int --strict` is an error even with `--default`.
//! - Without `--default`, any miss is an error.

use anyhow::{Context, Result};
use ini_config::{ConfigCache, ConfigError, ConfigHandle};

pub struct GetArgs {
    pub address: String,
    pub file: Option<String>,
    pub section: Option<String>,
    pub default: Option<String>,
    pub int: bool,
    pub strict: bool,
}

pub fn run(cache: &ConfigCache, args: GetArgs) -> Result<()> {
    let handle = ConfigHandle::new(
        args.file.clone().unwrap_or_default(),
        args.section.clone().unwrap_or_default(),
    );

    let (value, error) = if args.int {
        let default = parse_default_int(args.default.as_deref())?;
        if args.strict {
            match handle.int_strict(cache, &args.address) {
                Ok(v) => (v.to_string(), None),
                Err(e) => (default.to_string(), Some(e)),
            }
        } else {
            let (v, e) = handle.int(cache, &args.address, default).into_parts();
            (v.to_string(), e)
        }
    } else {
        handle
            .get(cache, &args.address, args.default.clone().unwrap_or_default())
            .into_parts()
    };

    match error {
        None => {}
        Some(e) if is_hard_error(&e) || args.default.is_none() => {
            return Err(e).with_context(|| format!("Failed to resolve '{}'", args.address));
        }
        Some(e) => {
            tracing::warn!(address = %args.address, error = %e, "Using default value");
        }
    }

    println!("{}", value);
    Ok(())
}

fn is_hard_error(err: &ConfigError) -> bool {
    err.is_fatal()
        || matches!(
            err,
            ConfigError::InvalidAddress { .. } | ConfigError::InvalidInteger { .. }
        )
}

fn parse_default_int(default: Option<&str>) -> Result<i64> {
    match default {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("--default '{}' is not an integer", raw)),
    }
}
