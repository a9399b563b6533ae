//! Input abstraction and incremental codepoint decoding
//!
//! A tokenizer pulls one codepoint at a time, so input is decoded lazily from
//! a buffered byte stream instead of being materialised up front.

use crate::error::{CoreError, Result};
use std::io::{self, BufReader, Cursor, Read};

/// Text source for a tokenizer
pub enum Input {
    /// Owned text
    Text(String),
    /// Static text reference (zero-copy for string literals)
    TextRef(&'static str),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin, files, sockets)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::TextRef(text) => f.debug_tuple("TextRef").field(text).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    fn into_reader(self) -> Box<dyn Read + Send> {
        match self {
            Input::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            Input::TextRef(text) => Box::new(text.as_bytes()),
            Input::Bytes(bytes) => Box::new(Cursor::new(bytes)),
            Input::Reader(reader) => reader,
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&'static str> for Input {
    fn from(text: &'static str) -> Self {
        Input::TextRef(text)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

/// Pull source yielding one codepoint at a time from a UTF-8 byte stream
pub struct CharSource {
    reader: BufReader<Box<dyn Read + Send>>,
    /// Bytes consumed so far
    position: usize,
}

impl std::fmt::Debug for CharSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharSource")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl CharSource {
    /// Wrap an input
    pub fn new(input: Input) -> Self {
        Self {
            reader: BufReader::new(input.into_reader()),
            position: 0,
        }
    }

    /// A source that is already exhausted
    pub fn empty() -> Self {
        Self::new(Input::TextRef(""))
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Next codepoint, or `None` at end of stream
    pub fn next_char(&mut self) -> Result<Option<char>> {
        let start = self.position;
        let lead = match self.read_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = match lead {
            0x00..=0x7F => return Ok(Some(lead as char)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(CoreError::InvalidUtf8 { position: start }),
        };

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or(CoreError::InvalidUtf8 { position: start })?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(CoreError::InvalidUtf8 { position: start })
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
