//! Error types for INI parsing and lookups.
//!
//! Responsibilities:
//! - Define one error variant per failure mode of parsing and resolution.
//! - Classify errors as fatal (broken file) or recoverable (lookup miss).
//!
//! Does NOT handle:
//! - Process termination. Callers decide what to do with a fatal error.
//! - Mapping errors to exit codes (see `crates/cli`).
//!
//! Invariants:
//! - Every variant carries enough context (path, line, identifiers) to locate
//!   the problem without re-reading the file.
//! - Only `MalformedLine` is fatal; every lookup error pairs with a default.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading configuration files or resolving values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("Failed to read config file at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank, non-comment line matched neither a section header nor a parameter.
    #[error("Ini file {} failed to parse at line {line_number}: `{line}`", .path.display())]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("File or section identifier is empty (file: '{file}', section: '{section}')")]
    MissingIdentifier { file: String, section: String },

    #[error("Section '{section}' is not defined in '{file}'")]
    SectionNotFound { file: String, section: String },

    #[error("Key '{key}' does not exist in section '{section}' of '{file}'")]
    KeyNotFound {
        file: String,
        section: String,
        key: String,
    },

    /// A dotted address did not split into exactly `file.section.key`, or one
    /// of its three parts was empty.
    #[error("Invalid address '{address}': {}", address_problem(*.parts))]
    InvalidAddress { address: String, parts: usize },

    /// Only produced by the strict integer accessor.
    #[error("Value '{value}' for key '{key}' is not a base-10 integer")]
    InvalidInteger { key: String, value: String },
}

fn address_problem(parts: usize) -> String {
    if parts == 3 {
        "expected file.section.key, found an empty part".to_string()
    } else {
        format!("expected file.section.key, got {parts} part(s)")
    }
}

impl ConfigError {
    /// Returns true when the error means the configuration itself is broken
    /// and the caller should stop rather than continue with partial data.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConfigError::MalformedLine { .. })
    }

    /// Returns true when a requested section or key simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::SectionNotFound { .. } | ConfigError::KeyNotFound { .. }
        )
    }
}
