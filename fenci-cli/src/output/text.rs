//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &str, _index: usize) -> Result<()> {
        writeln!(self.writer, "{token}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_token_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_token("湖北省", 0).unwrap();
        formatter.format_token("iPhone", 1).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "湖北省\niPhone\n");
    }

    #[test]
    fn test_empty_output() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert!(formatter.into_inner().is_empty());
    }
}
