//! Compare command implementation

use super::{DictionaryArgs, PrefixArgs};
use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use fenci_core::{PolicyKind, TokenizerConfig};
use fenci_dict::Dictionary;
use serde::Serialize;
use std::io::{self, Write};

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub prefix: PrefixArgs,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Text to segment
    #[arg(required = true)]
    pub text: String,
}

/// Tokens produced by one policy
#[derive(Debug, Serialize, PartialEq)]
pub struct PolicyTokens {
    /// Policy name
    pub policy: PolicyKind,
    /// Tokens in emission order
    pub tokens: Vec<String>,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let dictionary = self.dictionary.load(config)?;
        let results = self.run(&dictionary, config)?;

        let mut out = io::stdout().lock();
        match self.format.unwrap_or(config.output.format) {
            OutputFormat::Text => {
                for result in &results {
                    writeln!(out, "{:<12} {}", result.policy, result.tokens.join(" "))?;
                }
            }
            OutputFormat::Json => {
                if config.output.pretty_json {
                    serde_json::to_writer_pretty(&mut out, &results)?;
                } else {
                    serde_json::to_writer(&mut out, &results)?;
                }
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Segment the text once per policy
    pub fn run(&self, dictionary: &Dictionary, config: &CliConfig) -> Result<Vec<PolicyTokens>> {
        let output_prefix = self.prefix.resolve(config);

        PolicyKind::ALL
            .iter()
            .map(|&policy| -> Result<PolicyTokens> {
                let segmenter = dictionary.segmenter(
                    TokenizerConfig::builder()
                        .policy(policy)
                        .output_prefix(output_prefix),
                )?;
                let tokens = segmenter
                    .segment(&self.text)
                    .with_context(|| format!("Segmentation failed with the {policy} policy"))?;
                log::debug!("{policy}: {} tokens", tokens.len());
                Ok(PolicyTokens { policy, tokens })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenci_dict::DictionarySource;

    #[test]
    fn test_runs_every_policy_in_order() {
        let dictionary = DictionarySource::words(["湖北", "湖北省", "省长"])
            .build()
            .unwrap();
        let args = CompareArgs {
            dictionary: DictionaryArgs::default(),
            prefix: PrefixArgs::default(),
            format: None,
            text: "湖北省长".to_string(),
        };

        let results = args.run(&dictionary, &CliConfig::default()).unwrap();
        let policies: Vec<PolicyKind> = results.iter().map(|r| r.policy).collect();
        assert_eq!(policies, PolicyKind::ALL.to_vec());

        let longest = results
            .iter()
            .find(|r| r.policy == PolicyKind::Longest)
            .unwrap();
        assert_eq!(longest.tokens, vec!["湖北省", "长"]);

        let max_count = results
            .iter()
            .find(|r| r.policy == PolicyKind::MaxCount)
            .unwrap();
        assert_eq!(max_count.tokens, vec!["湖北", "湖北省", "省长"]);
    }

    #[test]
    fn test_policy_serializes_by_name() {
        let result = PolicyTokens {
            policy: PolicyKind::PrefixFirst,
            tokens: vec!["ab".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"policy":"prefix-first","tokens":["ab"]}"#
        );
    }
}
