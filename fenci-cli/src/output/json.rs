//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs tokens as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<TokenData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenData {
    /// Position of the token in the output stream
    pub index: usize,
    /// The token text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
            pretty,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &str, index: usize) -> Result<()> {
        self.tokens.push(TokenData {
            index,
            text: token.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.tokens)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
