//! `dump`: print a parsed file or one section.

use anyhow::Result;
use ini_config::ConfigCache;

use crate::formatters::{OutputFormat, format_file, format_section};

pub fn run(
    cache: &ConfigCache,
    file_id: &str,
    section: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let text = match section {
        Some(name) => {
            let table = cache.section(file_id, name)?;
            format_section(name, &table, output)?
        }
        None => {
            let config = cache.resolve_file(file_id)?;
            if config.is_empty() {
                tracing::warn!(
                    file_id,
                    path = %cache.path_for(file_id).display(),
                    "No parameters found"
                );
            }
            format_file(&config, output)?
        }
    };

    print!("{}", text);
    Ok(())
}
