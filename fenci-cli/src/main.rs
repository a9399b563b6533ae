//! fenci command-line entry point

use clap::Parser;
use fenci_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
