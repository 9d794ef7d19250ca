//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the effective log level from `--log-level` and `--debug`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not install the tracing subscriber (see `logging` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;
use crate::logging::LogLevel;

#[derive(Parser)]
#[command(name = "ini-cli")]
#[command(about = "Read values from INI configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ini-cli get app.server.port\n  ini-cli get port --file app --section server --default 8080 --int\n  ini-cli --dir /etc/myapp dump app --section server -o ini\n  ini-cli check app.ini db.ini\n"
)]
pub struct Cli {
    /// Directory containing `<file>.ini` files (defaults to the working directory)
    #[arg(short = 'C', long, global = true, env = "INI_CONFIG_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Minimum level of diagnostics written to stderr (RUST_LOG overrides)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warning)]
    pub log_level: LogLevel,

    /// Shortcut for `--log-level debug`
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a single value
    Get {
        /// Key, or a dotted `file.section.key` address
        address: String,

        /// File identifier used with a bare key (file name without `.ini`)
        #[arg(short, long)]
        file: Option<String>,

        /// Section used with a bare key
        #[arg(short, long)]
        section: Option<String>,

        /// Value printed when the lookup misses (otherwise the miss is an error)
        #[arg(short, long)]
        default: Option<String>,

        /// Interpret the value as a base-10 integer (non-numeric values print 0)
        #[arg(long)]
        int: bool,

        /// With --int, reject non-numeric values instead of printing 0
        #[arg(long, requires = "int")]
        strict: bool,
    },

    /// Print a parsed file or one of its sections
    Dump {
        /// File identifier (file name without `.ini`)
        file_id: String,

        /// Only print this section
        #[arg(short, long)]
        section: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Validate INI files without caching them
    Check {
        /// Paths of the files to validate
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
}
