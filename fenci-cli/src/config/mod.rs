//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use fenci_core::PolicyKind;
use fenci_dict::DEFAULT_EXTENSION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Default segmentation policy
    pub policy: PolicyKind,

    /// Emit partially matched spans
    pub output_prefix: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Longest,
            output_prefix: false,
        }
    }
}

/// Dictionary-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary files, directories or glob patterns
    pub paths: Vec<PathBuf>,

    /// File suffix searched for inside directories
    pub extension: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.segmentation.policy, PolicyKind::Longest);
        assert!(!config.segmentation.output_prefix);
        assert!(config.dictionary.paths.is_empty());
        assert_eq!(config.dictionary.extension, "dic");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [segmentation]
            policy = "max-count"

            [dictionary]
            paths = ["dicts/", "extra/brands.dic"]
            "#,
        )
        .unwrap();

        assert_eq!(config.segmentation.policy, PolicyKind::MaxCount);
        assert!(!config.segmentation.output_prefix);
        assert_eq!(config.dictionary.paths.len(), 2);
        assert_eq!(config.dictionary.extension, "dic");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result: Result<CliConfig, _> = toml::from_str(
            r#"
            [segmentation]
            policy = "greedy"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fenci.toml");
        fs::write(&path, "[output]\nformat = \"json\"\npretty_json = false\n").unwrap();

        let config = CliConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/fenci.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fenci.toml");
        fs::write(&path, "[segmentation]\npolicy = \"greedy\"\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
        assert!(err.to_string().starts_with("Configuration error: "));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<CliConfig>(&text).unwrap(), config);
    }
}
