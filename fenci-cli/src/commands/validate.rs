//! Validate command implementation

use super::DictionaryArgs;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self.dictionary.load(config) {
            Ok(dictionary) => {
                let stats = dictionary.stats();
                println!("✓ Dictionary is valid!");
                println!("  Files: {}", stats.files);
                println!("  Words: {}", stats.words);
                println!("  Automaton nodes: {}", stats.nodes);
                if stats.words == 0 {
                    log::warn!("Dictionary contains no words; only fallback rules will apply");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e:#}");
                Err(e.context("Validation failed"))
            }
        }
    }
}
