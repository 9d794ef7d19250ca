//! INI file parsing.
//!
//! Responsibilities:
//! - Read a file line by line and assemble the section -> key -> value mapping.
//! - Track the current section while classifying each line.
//! - Report malformed lines with the file path and 1-based line number.
//!
//! Does NOT handle:
//! - Caching parsed files (see `cache.rs`).
//! - Resolving lookups or defaults (see `accessor.rs`).
//!
//! Invariants:
//! - Parameters before any `[section]` header land in the "" section.
//! - Re-declaring a section resumes adding keys to the existing table.
//! - Duplicate keys within a section keep the last value in file order.
//! - A section header alone never creates an empty table.
//! - The file handle is dropped on every exit path.
//! - Invalid UTF-8 never fails a file; offending bytes decode to U+FFFD.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::ConfigError;
use crate::line::{ParsedLine, classify, is_skippable};

/// Parameters of one section, keyed by name.
pub type SectionTable = BTreeMap<String, String>;

/// The fully parsed contents of one configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileConfig {
    sections: BTreeMap<String, SectionTable>,
}

impl FileConfig {
    /// Returns the table for `name`, if any parameter was declared under it.
    pub fn section(&self, name: &str) -> Option<&SectionTable> {
        self.sections.get(name)
    }

    /// Returns the value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterates sections in name order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionTable)> {
        self.sections
            .iter()
            .map(|(name, table)| (name.as_str(), table))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections holding at least one key.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of keys across all sections.
    pub fn key_count(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    fn insert(&mut self, section: &str, key: String, value: String) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key, value);
    }
}

/// Parses INI text from any buffered reader.
///
/// `source` is only used to label errors and log lines.
pub fn parse_reader<R: BufRead>(mut reader: R, source: &Path) -> Result<FileConfig, ConfigError> {
    let mut config = FileConfig::default();
    let mut current_section = String::new();

    let mut buf = Vec::new();
    let mut line_number = 0usize;

    // `read_until` hands back the final line even without a trailing newline.
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source_err| ConfigError::Io {
                path: source.to_path_buf(),
                source: source_err,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        // Bytes that are not UTF-8 decode to U+FFFD rather than failing the file.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if is_skippable(line) {
            continue;
        }

        let parsed = classify(line);
        tracing::trace!(line_number, parsed = %parsed, "Classified line");
        match parsed {
            ParsedLine::Section(name) => current_section = name,
            ParsedLine::Parameter { key, value } => config.insert(&current_section, key, value),
            ParsedLine::Unknown => {
                tracing::error!(
                    path = %source.display(),
                    line_number,
                    line,
                    "Malformed line in ini file"
                );
                return Err(ConfigError::MalformedLine {
                    path: source.to_path_buf(),
                    line_number,
                    line: line.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        path = %source.display(),
        sections = config.len(),
        keys = config.key_count(),
        "Parsed ini file"
    );
    Ok(config)
}

/// Parses INI text held in memory.
pub fn parse_str(text: &str, source: &Path) -> Result<FileConfig, ConfigError> {
    parse_reader(text.as_bytes(), source)
}

/// Opens and parses the INI file at `path`.
pub fn parse_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> FileConfig {
        parse_str(text, Path::new("test.ini")).unwrap()
    }

    #[test]
    fn test_basic_sections_and_keys() {
        let config = parse("[server]\nhost = localhost\nport = 8080\n\n[db]\nname=main\n");
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("server", "host"), Some("localhost"));
        assert_eq!(config.get("server", "port"), Some("8080"));
        assert_eq!(config.get("db", "name"), Some("main"));
        assert_eq!(config.key_count(), 3);
    }

    #[test]
    fn test_redeclared_section_merges() {
        let config = parse("[a]\nx=1\n[b]\ny=2\n[a]\nz=3");
        let a = config.section("a").unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a["x"], "1");
        assert_eq!(a["z"], "3");
        assert_eq!(config.section("b").unwrap()["y"], "2");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let config = parse("[a]\nx=1\nx=2");
        assert_eq!(config.section("a").unwrap().len(), 1);
        assert_eq!(config.get("a", "x"), Some("2"));
    }

    #[test]
    fn test_parameter_before_header_uses_empty_section() {
        let config = parse("top=level\n[a]\nx=1");
        assert_eq!(config.get("", "top"), Some("level"));
        assert_eq!(config.get("a", "x"), Some("1"));
    }

    #[test]
    fn test_header_without_keys_creates_nothing() {
        let config = parse("[empty]\n[a]\nx=1\n");
        assert!(!config.contains_section("empty"));
        assert_eq!(config.section_names().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let config = parse("; header comment\n\n   \n[a]\n;x=5\n  ; indented\ny=6 ; inline\n");
        assert_eq!(config.get("a", "x"), None);
        assert_eq!(config.get("a", "y"), Some("6"));
    }

    #[test]
    fn test_final_line_without_newline_is_kept() {
        let config = parse("[a]\nx=1\nlast=yes");
        assert_eq!(config.get("a", "last"), Some("yes"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let config = parse("[a]\r\nx=1\r\ny=2\r\n");
        assert_eq!(config.get("a", "x"), Some("1"));
        assert_eq!(config.get("a", "y"), Some("2"));
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let err = parse_str("[a]\nx=1\n@@@\ny=2\n", Path::new("broken.ini")).unwrap_err();
        match err {
            ConfigError::MalformedLine {
                path,
                line_number,
                line,
            } => {
                assert_eq!(path, Path::new("broken.ini"));
                assert_eq!(line_number, 3);
                assert_eq!(line, "@@@");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_key_line_is_malformed() {
        let err = parse_str("[a]\n=value\n", Path::new("t.ini")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_parse_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[server]\nport=9000").unwrap();

        let config = parse_file(file.path()).unwrap();
        assert_eq!(config.get("server", "port"), Some("9000"));
    }

    #[test]
    fn test_parse_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_non_utf8_bytes_do_not_discard_file() {
        let bytes: &[u8] = b"[server]\nport=8080\nname=caf\xe9\n";
        let config = parse_reader(bytes, Path::new("latin1.ini")).unwrap();
        assert_eq!(config.get("server", "port"), Some("8080"));
        assert_eq!(config.get("server", "name"), Some("caf\u{FFFD}"));
    }

    #[test]
    fn test_non_utf8_line_number_counts_raw_lines() {
        let bytes: &[u8] = b"[a]\nx=\xff\n@@@\n";
        match parse_reader(bytes, Path::new("t.ini")).unwrap_err() {
            ConfigError::MalformedLine { line_number, .. } => assert_eq!(line_number, 3),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_serializes_as_nested_map() {
        let config = parse("[a]\nx=1\n");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "a": { "x": "1" } }));
    }
}
