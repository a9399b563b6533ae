//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Configuration template written by `generate-config`
pub const CONFIG_TEMPLATE: &str = r#"# fenci configuration

[segmentation]
# One of: longest, shortest, all-prefixes, prefix-first, max-count
policy = "longest"

# Emit spans that walked into the dictionary without completing a word
output_prefix = false

[dictionary]
# Files, directories or glob patterns; -d/--dict on the command line wins
paths = []

# Suffix of dictionary files searched for inside directories
extension = "dic"

[output]
# One of: text, json
format = "text"
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite",
                self.output.display()
            );
        }

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated: {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Add your dictionary paths under [dictionary]");
        println!("2. Check the dictionaries load:");
        println!("   fenci -c {} validate", self.output.display());
        println!("3. Segment text with it:");
        println!("   fenci -c {} segment \"要分词的文本\"", self.output.display());

        Ok(())
    }
}
