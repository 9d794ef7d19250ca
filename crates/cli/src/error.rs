//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use ini_config::ConfigError;

/// Structured exit codes for ini-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable file or other unhandled failure.
    GeneralError = 1,

    /// Not found - missing identifier, section, or key.
    ///
    /// Scripts should pass `--default` or fix the address.
    NotFound = 4,

    /// Validation error - malformed INI line, bad address, or non-integer value.
    ///
    /// Scripts should fix the file or input and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingIdentifier { .. }
            | ConfigError::SectionNotFound { .. }
            | ConfigError::KeyNotFound { .. } => ExitCode::NotFound,

            ConfigError::MalformedLine { .. }
            | ConfigError::InvalidAddress { .. }
            | ConfigError::InvalidInteger { .. } => ExitCode::ValidationError,

            ConfigError::Io { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_from_config_error_not_found() {
        let err = ConfigError::KeyNotFound {
            file: "app".to_string(),
            section: "server".to_string(),
            key: "port".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_from_config_error_malformed() {
        let err = ConfigError::MalformedLine {
            path: PathBuf::from("app.ini"),
            line_number: 1,
            line: "@@@".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err: anyhow::Error = Err::<(), _>(ConfigError::InvalidAddress {
            address: "a.b".to_string(),
            parts: 2,
        })
        .context("lookup failed")
        .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_non_config_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
