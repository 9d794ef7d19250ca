//! Environment variable helpers.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Name the variables this crate understands.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

/// Base directory that `<file>.ini` lookups are resolved against.
pub const CONFIG_DIR_ENV: &str = "INI_CONFIG_DIR";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
