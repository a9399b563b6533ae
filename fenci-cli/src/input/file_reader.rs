//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use fenci_core::Input;
use std::fs::File;
use std::io;
use std::path::Path;

/// Opens segmentation input as a stream
pub struct FileReader;

impl FileReader {
    /// Open a file for streaming segmentation
    pub fn open(path: &Path) -> Result<Input> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let file =
            File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        log::debug!("Streaming input from {}", path.display());
        Ok(Input::from_reader(file))
    }

    /// Stream standard input
    pub fn stdin() -> Input {
        Input::from_reader(io::stdin())
    }
}
