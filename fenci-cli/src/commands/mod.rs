//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use fenci_dict::{collect_files, Dictionary, DictionarySource};
use std::path::PathBuf;

pub mod compare;
pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text into dictionary words
    Segment(segment::SegmentArgs),

    /// Segment text with every policy side by side
    Compare(compare::CompareArgs),

    /// Load dictionaries and report statistics
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// Dictionary selection shared by the segmenting commands
#[derive(Debug, Args, Clone, Default)]
pub struct DictionaryArgs {
    /// Dictionary files, directories or glob patterns
    #[arg(short, long = "dict", value_name = "PATH/PATTERN")]
    pub dict: Vec<PathBuf>,

    /// File suffix searched for inside dictionary directories
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}

impl DictionaryArgs {
    /// Load the dictionary named on the command line, falling back to the
    /// configuration file
    pub fn load(&self, config: &CliConfig) -> Result<Dictionary> {
        let patterns = if self.dict.is_empty() {
            &config.dictionary.paths
        } else {
            &self.dict
        };
        if patterns.is_empty() {
            return Err(CliError::MissingDictionary.into());
        }
        let extension = self
            .extension
            .as_deref()
            .unwrap_or(&config.dictionary.extension);

        let roots = resolve_patterns(patterns)?;
        let files = collect_files(&roots, extension).context("Failed to locate dictionaries")?;
        log::info!("Loading {} dictionary files", files.len());

        let dictionary = DictionarySource::Files(files)
            .build()
            .context("Failed to load dictionaries")?;
        log::info!("Dictionary ready: {}", dictionary.stats());
        Ok(dictionary)
    }
}

/// Partial-match emission, overriding the configuration file either way
#[derive(Debug, Args, Clone, Copy, Default)]
pub struct PrefixArgs {
    /// Emit partially matched spans instead of dropping them
    #[arg(long, overrides_with = "no_output_prefix")]
    pub output_prefix: bool,

    /// Drop partially matched spans even if the config file enables them
    #[arg(long, overrides_with = "output_prefix")]
    pub no_output_prefix: bool,
}

impl PrefixArgs {
    /// Value after layering the flags over `config`
    pub fn resolve(&self, config: &CliConfig) -> bool {
        match (self.output_prefix, self.no_output_prefix) {
            (true, _) => true,
            (_, true) => false,
            _ => config.segmentation.output_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Validate(validate::ValidateArgs {
            dictionary: DictionaryArgs {
                dict: vec![PathBuf::from("words.dic")],
                extension: None,
            },
        });

        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("words.dic"));
    }

    #[test]
    fn test_prefix_flags_override_config() {
        let mut config = CliConfig::default();
        config.segmentation.output_prefix = true;

        assert!(PrefixArgs::default().resolve(&config));
        let off = PrefixArgs {
            output_prefix: false,
            no_output_prefix: true,
        };
        assert!(!off.resolve(&config));

        let on = PrefixArgs {
            output_prefix: true,
            no_output_prefix: false,
        };
        assert!(on.resolve(&CliConfig::default()));
        assert!(!PrefixArgs::default().resolve(&CliConfig::default()));
    }

    #[test]
    fn test_missing_dictionary() {
        let err = DictionaryArgs::default()
            .load(&CliConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingDictionary)
        ));
    }

    #[test]
    fn test_config_paths_are_fallback() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.words"), "ab\nabcd\n").unwrap();
        fs::write(temp_dir.path().join("b.dic"), "x\n").unwrap();

        let mut config = CliConfig::default();
        config.dictionary.paths = vec![temp_dir.path().to_path_buf()];
        config.dictionary.extension = "words".to_string();

        let dictionary = DictionaryArgs::default().load(&config).unwrap();
        assert_eq!(dictionary.stats().words, 2);

        let args = DictionaryArgs {
            dict: vec![temp_dir.path().to_path_buf()],
            extension: None,
        };
        let dictionary = args.load(&CliConfig::default()).unwrap();
        assert_eq!(dictionary.stats().words, 1);
    }
}
