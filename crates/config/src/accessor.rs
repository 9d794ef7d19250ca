//! Value lookup over the configuration cache.
//!
//! Responsibilities:
//! - Parse lookup addresses: a bare key or a dotted `file.section.key`.
//! - Resolve an address against a `ConfigCache`, pairing every miss with the
//!   caller's default.
//! - Provide string and integer accessors.
//!
//! Does NOT handle:
//! - Reading or caching files (see `cache.rs`).
//!
//! Invariants:
//! - A dotted address overrides the handle's file and section.
//! - A dotted address must split into exactly three non-empty parts.
//! - `int` yields 0 without an error for a stored value that is not an
//!   integer; `int_strict` reports `InvalidInteger` instead.

use std::fmt;
use std::str::FromStr;

use crate::cache::ConfigCache;
use crate::error::ConfigError;

const ADDRESS_SEPARATOR: char = '.';

/// A parsed lookup address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// A key resolved against the handle's file and section.
    Key(String),
    /// A fully qualified `file.section.key`.
    Dotted {
        file: String,
        section: String,
        key: String,
    },
}

impl Address {
    /// Parses `addr`.
    ///
    /// The address is dotted when it contains a `.` after the first character.
    /// A leading `.` keeps it a plain key.
    pub fn parse(addr: &str) -> Result<Self, ConfigError> {
        match addr.find(ADDRESS_SEPARATOR) {
            Some(idx) if idx > 0 => {
                let parts: Vec<&str> = addr.split(ADDRESS_SEPARATOR).collect();
                match parts.as_slice() {
                    [file, section, key]
                        if !file.is_empty() && !section.is_empty() && !key.is_empty() =>
                    {
                        Ok(Address::Dotted {
                            file: file.to_string(),
                            section: section.to_string(),
                            key: key.to_string(),
                        })
                    }
                    _ => Err(ConfigError::InvalidAddress {
                        address: addr.to_string(),
                        parts: parts.len(),
                    }),
                }
            }
            _ => Ok(Address::Key(addr.to_string())),
        }
    }
}

impl FromStr for Address {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Key(key) => write!(f, "{}", key),
            Address::Dotted { file, section, key } => write!(f, "{}.{}.{}", file, section, key),
        }
    }
}

/// The outcome of a lookup: the resolved value, or the caller's default
/// together with the reason the lookup missed.
#[derive(Debug)]
#[must_use]
pub struct Lookup<T> {
    pub value: T,
    pub error: Option<ConfigError>,
}

impl<T> Lookup<T> {
    fn found(value: T) -> Self {
        Self { value, error: None }
    }

    fn fallback(default: T, error: ConfigError) -> Self {
        Self {
            value: default,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Discards the default if the lookup failed.
    pub fn into_result(self) -> Result<T, ConfigError> {
        match self.error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }

    /// Returns the value, which is the default if the lookup failed.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Option<ConfigError>) {
        (self.value, self.error)
    }
}

/// Addresses one section of one file. Owns only the identifiers; every
/// lookup resolves through a `ConfigCache`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigHandle {
    file: String,
    section: String,
}

impl ConfigHandle {
    pub fn new(file: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            section: section.into(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    /// Resolves `addr` to its stored string value.
    ///
    /// # Errors
    /// `InvalidAddress`, `MissingIdentifier`, `SectionNotFound`, `KeyNotFound`,
    /// or a fatal `MalformedLine` from the first parse of the file.
    pub fn try_get(&self, cache: &ConfigCache, addr: &str) -> Result<String, ConfigError> {
        let address = Address::parse(addr)?;
        let (file, section, key) = match &address {
            Address::Key(key) => (self.file.as_str(), self.section.as_str(), key.as_str()),
            Address::Dotted { file, section, key } => {
                (file.as_str(), section.as_str(), key.as_str())
            }
        };

        if file.is_empty() || section.is_empty() {
            return Err(ConfigError::MissingIdentifier {
                file: file.to_string(),
                section: section.to_string(),
            });
        }

        let config = cache.resolve_file(file)?;
        let table = config
            .section(section)
            .ok_or_else(|| ConfigError::SectionNotFound {
                file: file.to_string(),
                section: section.to_string(),
            })?;
        table
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound {
                file: file.to_string(),
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Resolves `addr`, falling back to `default` on any miss.
    pub fn get(&self, cache: &ConfigCache, addr: &str, default: impl Into<String>) -> Lookup<String> {
        match self.try_get(cache, addr) {
            Ok(value) => Lookup::found(value),
            Err(e) => {
                tracing::debug!(address = addr, error = %e, "Config lookup fell back to default");
                Lookup::fallback(default.into(), e)
            }
        }
    }

    /// Resolves `addr` as a base-10 integer.
    ///
    /// A stored value that does not parse yields 0 with no error. Use
    /// [`ConfigHandle::int_strict`] to surface that case.
    pub fn int(&self, cache: &ConfigCache, addr: &str, default: i64) -> Lookup<i64> {
        match self.try_get(cache, addr) {
            Ok(value) => Lookup::found(value.trim().parse::<i64>().unwrap_or(0)),
            Err(e) => Lookup::fallback(default, e),
        }
    }

    /// Resolves `addr` as a base-10 integer, rejecting non-numeric values.
    pub fn int_strict(&self, cache: &ConfigCache, addr: &str) -> Result<i64, ConfigError> {
        let value = self.try_get(cache, addr)?;
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidInteger {
                key: addr.to_string(),
                value,
            })
    }
}

impl ConfigCache {
    /// Resolves a dotted `file.section.key` address, falling back to `default`.
    ///
    /// A bare key has no file or section to resolve against and yields
    /// `MissingIdentifier`.
    pub fn get(&self, addr: &str, default: impl Into<String>) -> Lookup<String> {
        ConfigHandle::default().get(self, addr, default)
    }

    /// Integer variant of [`ConfigCache::get`].
    pub fn int(&self, addr: &str, default: i64) -> Lookup<i64> {
        ConfigHandle::default().int(self, addr, default)
    }
}
