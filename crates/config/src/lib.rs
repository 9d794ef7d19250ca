//! INI configuration reading with a lazily populated, shared cache.
//!
//! This crate parses line-oriented `.ini` files into a section -> key -> value
//! mapping, caches each file on first access, and resolves lookups addressed
//! either by a `ConfigHandle` (file + section) plus key, or by a dotted
//! `file.section.key` string.
//!
//! ```rust,ignore
//! let cache = ConfigCache::from_env();
//! let port = cache.int("app.server.port", 8080).into_value();
//! let host = cache.handle("app", "server").get(&cache, "host", "localhost").into_value();
//! ```

mod accessor;
mod cache;
mod env;
mod error;
pub mod line;
mod parser;

pub use accessor::{Address, ConfigHandle, Lookup};
pub use cache::{ConfigCache, INI_EXTENSION};
pub use env::{CONFIG_DIR_ENV, env_var_or_none};
pub use error::ConfigError;
pub use line::ParsedLine;
pub use parser::{FileConfig, SectionTable, parse_file, parse_reader, parse_str};
