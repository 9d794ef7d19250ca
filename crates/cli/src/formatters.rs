//! Output formatters for CLI commands.
//!
//! Provides JSON and normalised INI renderings of parsed files and sections.

use anyhow::Result;
use ini_config::{FileConfig, SectionTable};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Ini,
}

/// Render a whole file.
pub fn format_file(config: &FileConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(config)?)),
        OutputFormat::Ini => {
            let blocks: Vec<String> = config
                .sections()
                .map(|(name, table)| ini_block(name, table))
                .collect();
            Ok(blocks.join("\n"))
        }
    }
}

/// Render one section.
pub fn format_section(name: &str, table: &SectionTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(table)?)),
        OutputFormat::Ini => Ok(ini_block(name, table)),
    }
}

// Keys under the "" section are emitted without a header so they re-parse
// into the same place.
fn ini_block(name: &str, table: &SectionTable) -> String {
    let mut out = String::new();
    if !name.is_empty() {
        out.push_str(&format!("[{}]\n", name));
    }
    for (key, value) in table {
        out.push_str(&format!("{} = {}\n", escape(key), escape(value)));
    }
    out
}

fn escape(text: &str) -> String {
    text.replace(';', r"\;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample() -> FileConfig {
        ini_config::parse_str(
            "top = 1\n[b]\ny = 2\n[a]\nx = hello\\; world\n",
            Path::new("sample.ini"),
        )
        .unwrap()
    }

    #[test]
    fn test_json_file() {
        let out = format_file(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["a"]["x"], "hello; world");
        assert_eq!(value[""]["top"], "1");
    }

    #[test]
    fn test_ini_file_is_sorted_and_reparses() {
        let config = sample();
        let out = format_file(&config, OutputFormat::Ini).unwrap();
        assert_eq!(out, "top = 1\n\n[a]\nx = hello\\; world\n\n[b]\ny = 2\n");

        let reparsed = ini_config::parse_str(&out, Path::new("out.ini")).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_ini_section() {
        let config = sample();
        let out = format_section("b", config.section("b").unwrap(), OutputFormat::Ini).unwrap();
        assert_eq!(out, "[b]\ny = 2\n");
    }
}
