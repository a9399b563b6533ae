//! Segment command implementation

use super::{DictionaryArgs, PrefixArgs};
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use fenci_core::{Input, PolicyKind, TokenizerConfig, TokenizerConfigBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Segmentation policy
    #[arg(short, long, value_name = "POLICY")]
    pub policy: Option<PolicyKind>,

    #[command(flatten)]
    pub prefix: PrefixArgs,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read text from a file instead of the command line
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Text to segment; standard input is read when neither this nor
    /// --input is given
    pub text: Option<String>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let dictionary = self.dictionary.load(config)?;
        let segmenter = dictionary.segmenter(self.tokenizer_config(config))?;
        let policy = segmenter.config().policy();

        let input = match (&self.input, &self.text) {
            (Some(path), _) => FileReader::open(path)?,
            (None, Some(text)) => Input::from_text(text.as_str()),
            (None, None) => FileReader::stdin(),
        };

        let mut formatter = self.formatter(config)?;
        let mut tokenizer = segmenter.tokenizer();
        tokenizer.reset(input);

        let mut count = 0;
        for token in tokenizer.tokens() {
            let token = token.context("Failed to read input")?;
            formatter.format_token(&token, count)?;
            count += 1;
        }
        formatter.finish()?;

        log::info!("Emitted {count} tokens with the {policy} policy");
        Ok(())
    }

    /// Command-line flags layered over the configuration file
    fn tokenizer_config(&self, config: &CliConfig) -> TokenizerConfigBuilder {
        TokenizerConfig::builder()
            .policy(self.policy.unwrap_or(config.segmentation.policy))
            .output_prefix(self.prefix.resolve(config))
    }

    fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> =
            match self.format.unwrap_or(config.output.format) {
                OutputFormat::Text => Box::new(TextFormatter::new(writer)),
                OutputFormat::Json => {
                    Box::new(JsonFormatter::new(writer, config.output.pretty_json))
                }
            };
        Ok(formatter)
    }
}
