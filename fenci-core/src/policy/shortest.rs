//! Shortest match

use super::SegmentPolicy;
use crate::config::PolicyKind;
use crate::error::Result;
use crate::scanner::{Flow, Scanner, Walk};

/// Ends every walk at the first dictionary word it reaches
#[derive(Debug, Clone, Default)]
pub struct Shortest {
    output_prefix: bool,
    word: Option<usize>,
}

impl Shortest {
    /// Create the policy
    pub fn new(output_prefix: bool) -> Self {
        Self {
            output_prefix,
            word: None,
        }
    }
}

impl SegmentPolicy for Shortest {
    fn on_word_matched(&mut self, walk: &mut Walk<'_>) -> Flow {
        self.word = Some(walk.len());
        Flow::Stop
    }

    fn on_match_finished(&mut self, walk: &mut Walk<'_>) {
        if self.word != Some(walk.len()) {
            self.word = Some(walk.len());
        }
    }

    fn on_unmatched(&mut self, walk: &mut Walk<'_>) {
        if let Some(word) = self.word {
            walk.reinject_from(word);
            return;
        }
        // Nothing matched from here: drop the first codepoint, retry the rest.
        walk.reinject_from(1);
        if self.output_prefix {
            self.word = Some(walk.len());
        }
    }

    fn next_token(&mut self, scanner: &mut Scanner) -> Result<Option<String>> {
        while self.word.is_none() && !scanner.is_finished() {
            scanner.walk(self)?;
        }
        Ok(self.word.take().map(|len| scanner.text(len)))
    }

    fn reset(&mut self) {
        self.word = None;
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Shortest
    }
}
