//! Max-token-count match

use super::{AllPrefixes, PrefixHits, SegmentPolicy};
use crate::config::PolicyKind;
use crate::error::Result;
use crate::scanner::{Flow, Scanner, Walk};

/// Prefers splitting into more, shorter dictionary words
///
/// After a walk with dictionary hits, everything past the shortest hit is
/// re-read so words starting inside the longer match are found too. The
/// re-read region is remembered as an overlap marker; a later walk that only
/// covers part of that region without finding any word is swallowed instead
/// of emitted twice.
#[derive(Debug, Clone, Default)]
pub struct MaxCount {
    inner: AllPrefixes,
    overlap: Option<Vec<char>>,
}

impl MaxCount {
    /// Create the policy
    pub fn new(output_prefix: bool) -> Self {
        Self {
            inner: AllPrefixes::new(output_prefix),
            overlap: None,
        }
    }

    fn hits(&mut self) -> &mut PrefixHits {
        &mut self.inner.hits
    }
}

impl SegmentPolicy for MaxCount {
    fn on_word_matched(&mut self, walk: &mut Walk<'_>) -> Flow {
        self.inner.on_word_matched(walk)
    }

    fn on_match_finished(&mut self, walk: &mut Walk<'_>) {
        let len = walk.len();
        if let Some(shortest) = self.inner.hits.shortest() {
            if shortest != len {
                walk.reinject_from(shortest);
                self.overlap = Some(walk.chars()[shortest..].to_vec());
            }
        } else {
            if let Some(overlap) = self.overlap.as_mut() {
                if !overlap.is_empty() && overlap.starts_with(walk.chars()) {
                    overlap.drain(..len);
                    return;
                }
            }
            walk.reinject_from(0);
            self.overlap = Some(walk.chars().to_vec());
        }
        self.inner.on_match_finished(walk);
    }

    fn on_unmatched(&mut self, walk: &mut Walk<'_>) {
        self.inner.on_unmatched(walk);
    }

    fn next_token(&mut self, scanner: &mut Scanner) -> Result<Option<String>> {
        let token = PrefixHits::drain(self, scanner, Self::hits)?;
        if scanner.is_finished() {
            self.overlap = None;
        }
        Ok(token)
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.overlap = None;
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::MaxCount
    }
}
