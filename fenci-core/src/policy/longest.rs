//! Longest (maximal) match

use super::SegmentPolicy;
use crate::config::PolicyKind;
use crate::error::Result;
use crate::scanner::{Flow, Scanner, Walk};

/// Emits the longest dictionary word reachable from each position
///
/// Every dictionary hit along a walk replaces the current best; when the walk
/// runs past the last hit without landing on another word, the overshoot is
/// given back and re-read.
#[derive(Debug, Clone, Default)]
pub struct Longest {
    output_prefix: bool,
    best: Option<usize>,
}

impl Longest {
    /// Create the policy
    pub fn new(output_prefix: bool) -> Self {
        Self {
            output_prefix,
            best: None,
        }
    }
}

impl SegmentPolicy for Longest {
    fn on_word_matched(&mut self, walk: &mut Walk<'_>) -> Flow {
        self.best = Some(walk.len());
        Flow::Continue
    }

    fn on_match_finished(&mut self, walk: &mut Walk<'_>) {
        self.best = Some(walk.len());
    }

    fn on_unmatched(&mut self, walk: &mut Walk<'_>) {
        if let Some(best) = self.best {
            walk.reinject_from(best);
        } else if self.output_prefix {
            self.best = Some(walk.len());
        }
    }

    fn next_token(&mut self, scanner: &mut Scanner) -> Result<Option<String>> {
        loop {
            if let Some(len) = self.best.take() {
                return Ok(Some(scanner.text(len)));
            }
            if scanner.is_finished() {
                return Ok(None);
            }
            scanner.walk(self)?;
        }
    }

    fn reset(&mut self) {
        self.best = None;
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Longest
    }
}
