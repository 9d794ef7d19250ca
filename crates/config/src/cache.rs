//! Lazily populated cache of parsed INI files.
//!
//! Responsibilities:
//! - Map a file identifier to `<base_dir>/<file_id>.ini` and parse it on first use.
//! - Hand out shared, immutable `FileConfig` snapshots for later lookups.
//!
//! Does NOT handle:
//! - Invalidation or reload. Changes on disk after first access are not observed.
//! - Address parsing and default values (see `accessor.rs`).
//!
//! Invariants:
//! - Exactly one parse per file identifier for the lifetime of the cache, even
//!   with concurrent callers: population runs under a single mutex.
//! - A file that cannot be read is cached as an empty `FileConfig` and never retried.
//! - A malformed file is never cached; the error is returned to the caller.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::accessor::ConfigHandle;
use crate::env::{CONFIG_DIR_ENV, env_var_or_none};
use crate::error::ConfigError;
use crate::parser::{FileConfig, SectionTable, parse_file};

/// File extension appended to every file identifier.
pub const INI_EXTENSION: &str = "ini";

/// Process-lifetime cache of parsed configuration files.
///
/// Construct one at startup and share it by reference (or `Arc`) with every
/// consumer. Tests build isolated instances pointed at temporary directories.
#[derive(Debug, Default)]
pub struct ConfigCache {
    base_dir: PathBuf,
    entries: Mutex<HashMap<String, Arc<FileConfig>>>,
}

impl ConfigCache {
    /// Creates an empty cache resolving files relative to the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache resolving files relative to `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: dir.into(),
            entries: Mutex::default(),
        }
    }

    /// Creates an empty cache resolving files relative to `dir`, or to the
    /// working directory when `dir` is absent or blank.
    pub fn with_base_dir_or_cwd(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) if !dir.to_string_lossy().trim().is_empty() => Self::with_base_dir(dir),
            _ => Self::new(),
        }
    }

    /// Creates an empty cache using `INI_CONFIG_DIR` as the base directory,
    /// falling back to the working directory when it is unset or blank.
    pub fn from_env() -> Self {
        Self::with_base_dir_or_cwd(env_var_or_none(CONFIG_DIR_ENV).as_deref().map(Path::new))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// On-disk location for `file_id`.
    pub fn path_for(&self, file_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", file_id, INI_EXTENSION))
    }

    /// Returns the parsed contents of `file_id`, parsing it on first access.
    ///
    /// # Errors
    /// - `MissingIdentifier` if `file_id` is empty.
    /// - `MalformedLine` if the file contains an unparseable line. Callers are
    ///   expected to treat this as fatal.
    pub fn resolve_file(&self, file_id: &str) -> Result<Arc<FileConfig>, ConfigError> {
        if file_id.is_empty() {
            return Err(ConfigError::MissingIdentifier {
                file: String::new(),
                section: String::new(),
            });
        }

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = entries.get(file_id) {
            return Ok(Arc::clone(config));
        }

        let path = self.path_for(file_id);
        let config = match parse_file(&path) {
            Ok(config) => config,
            Err(ConfigError::Io { path, source }) => {
                tracing::warn!(
                    file_id,
                    path = %path.display(),
                    error = %source,
                    "Config file unreadable, caching empty configuration"
                );
                FileConfig::default()
            }
            Err(e) => return Err(e),
        };

        let config = Arc::new(config);
        entries.insert(file_id.to_string(), Arc::clone(&config));
        Ok(config)
    }

    /// Returns a copy of one section table.
    ///
    /// # Errors
    /// `MissingIdentifier` when either identifier is empty, `SectionNotFound`
    /// when the file has no such section, or a fatal parse error.
    pub fn section(&self, file_id: &str, section: &str) -> Result<SectionTable, ConfigError> {
        if file_id.is_empty() || section.is_empty() {
            return Err(ConfigError::MissingIdentifier {
                file: file_id.to_string(),
                section: section.to_string(),
            });
        }
        let config = self.resolve_file(file_id)?;
        config
            .section(section)
            .cloned()
            .ok_or_else(|| ConfigError::SectionNotFound {
                file: file_id.to_string(),
                section: section.to_string(),
            })
    }

    /// Returns a handle addressing `section` in `file_id`.
    pub fn handle(&self, file_id: impl Into<String>, section: impl Into<String>) -> ConfigHandle {
        ConfigHandle::new(file_id, section)
    }

    /// Returns true if `file_id` has already been resolved.
    pub fn is_cached(&self, file_id: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(file_id)
    }

    /// Number of cached files.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
