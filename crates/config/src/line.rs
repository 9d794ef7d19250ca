//! Line classification for INI text.
//!
//! Responsibilities:
//! - Strip inline `;` comments, honouring the `\;` escape.
//! - Classify a single line as a section header, a parameter, or unknown.
//!
//! Does NOT handle:
//! - Skipping blank lines and full-line comments (the parser filters those
//!   with `is_skippable` before calling `classify`).
//! - Tracking which section a parameter belongs to (see `parser.rs`).
//!
//! Invariants:
//! - Comment stripping happens before any other parsing.
//! - Section names are one or more ASCII word characters.
//! - A parameter key is never empty; only the first `=` splits key from value.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Marker that starts a comment, either on its own line or inline.
pub const COMMENT_MARKER: char = ';';

const ESCAPED_COMMENT_MARKER: &str = "\\;";

static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([[:word:]]+)\]$").expect("section pattern is a valid regex")
});

/// The result of classifying one line of INI text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A `[name]` header.
    Section(String),
    /// A `key = value` assignment.
    Parameter { key: String, value: String },
    /// Anything else. The parser treats this as a malformed line.
    Unknown,
}

impl fmt::Display for ParsedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedLine::Section(name) => write!(f, "section: `{}`", name),
            ParsedLine::Parameter { key, value } => write!(f, "key: `{}`, value: `{}`", key, value),
            ParsedLine::Unknown => write!(f, "unknown"),
        }
    }
}

/// Returns true for lines the parser must skip without classifying:
/// blank or whitespace-only lines and full-line comments.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Truncates `line` at the first comment marker not preceded by a backslash.
pub fn strip_inline_comment(line: &str) -> &str {
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '\\' => escaped = !escaped,
            COMMENT_MARKER if !escaped => return &line[..idx],
            _ => escaped = false,
        }
    }
    line
}

/// Classifies one line of INI text.
pub fn classify(line: &str) -> ParsedLine {
    let line = strip_inline_comment(line).trim();

    if let Some(captures) = SECTION_PATTERN.captures(line) {
        return ParsedLine::Section(captures[1].to_string());
    }

    if let Some((key, value)) = line.split_once('=') {
        let key = key.trim();
        if !key.is_empty() {
            return ParsedLine::Parameter {
                key: unescape(key),
                value: unescape(value.trim()),
            };
        }
    }

    ParsedLine::Unknown
}

fn unescape(text: &str) -> String {
    if text.contains(ESCAPED_COMMENT_MARKER) {
        text.replace(ESCAPED_COMMENT_MARKER, ";")
    } else {
        text.to_string()
    }
}
