//! Dictionary error types

use fenci_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading dictionaries
#[derive(Error, Debug)]
pub enum DictError {
    /// A dictionary file or directory could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A dictionary path does not exist
    #[error("dictionary not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Building the tokenizer configuration failed
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DictError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DictError::NotFound(path)
        } else {
            DictError::Io { path, source }
        }
    }
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, DictError>;
