//! fenci CLI library
//!
//! This library provides the command-line interface for the fenci
//! dictionary-driven word segmenter.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

use clap::Parser;
use commands::Commands;
use config::CliConfig;
use std::path::PathBuf;

/// Dictionary-driven word segmentation for mixed Chinese/Latin/digit text
#[derive(Debug, Parser)]
#[command(name = "fenci", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "FENCI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        match &self.command {
            Commands::Segment(args) => args.execute(&config),
            Commands::Compare(args) => args.execute(&config),
            Commands::Validate(args) => args.execute(&config),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }

    /// Log filter for the requested verbosity
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .try_init();
    }
}
