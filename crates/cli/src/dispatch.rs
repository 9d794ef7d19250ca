//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Building the cache (see `main()`).

use anyhow::Result;
use ini_config::ConfigCache;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::get::GetArgs;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, cache: &ConfigCache) -> Result<()> {
    match cli.command {
        Commands::Get {
            address,
            file,
            section,
            default,
            int,
            strict,
        } => commands::get::run(
            cache,
            GetArgs {
                address,
                file,
                section,
                default,
                int,
                strict,
            },
        ),
        Commands::Dump {
            file_id,
            section,
            output,
        } => commands::dump::run(cache, &file_id, section.as_deref(), output),
        Commands::Check { paths } => commands::check::run(&paths),
    }
}
