//! Core error types

use thiserror::Error;

/// Errors raised while building or running a tokenizer
#[derive(Error, Debug)]
pub enum CoreError {
    /// The underlying input stream failed to read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream is not valid UTF-8
    #[error("invalid UTF-8 at byte {position}")]
    InvalidUtf8 {
        /// Byte offset of the first byte of the bad sequence
        position: usize,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidUtf8 { position: 7 };
        assert_eq!(err.to_string(), "invalid UTF-8 at byte 7");

        let err = CoreError::Config("no dictionary".into());
        assert_eq!(err.to_string(), "invalid configuration: no dictionary");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
