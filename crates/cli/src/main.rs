//! ini-cli - Command-line access to INI configuration files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the process-wide `ConfigCache` and hand it to commands.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Parsing or caching logic (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Exactly one `ConfigCache` exists per process run.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod logging;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use ini_config::ConfigCache;

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = logging::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    logging::init(cli.effective_log_level());

    // `--dir` already carries INI_CONFIG_DIR through clap's env fallback
    let cache = ConfigCache::with_base_dir_or_cwd(cli.dir.as_deref());
    tracing::debug!(base_dir = %cache.base_dir().display(), "Config cache ready");

    let exit_code = match run_command(cli, &cache) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
