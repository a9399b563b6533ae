//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single token
    fn format_token(&mut self, token: &str, index: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one token per line
    #[default]
    Text,
    /// JSON array of tokens with their position
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
