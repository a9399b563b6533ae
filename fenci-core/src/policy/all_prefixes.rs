//! All-prefixes match

use super::{PrefixHits, SegmentPolicy};
use crate::config::PolicyKind;
use crate::error::Result;
use crate::scanner::{Flow, Scanner, Walk};

/// Emits every dictionary word found along a walk, shortest first
///
/// With "ab" and "abcd" in the dictionary, input "abcd" yields both.
#[derive(Debug, Clone, Default)]
pub struct AllPrefixes {
    pub(crate) output_prefix: bool,
    pub(crate) hits: PrefixHits,
}

impl AllPrefixes {
    /// Create the policy
    pub fn new(output_prefix: bool) -> Self {
        Self {
            output_prefix,
            hits: PrefixHits::default(),
        }
    }

    fn hits(&mut self) -> &mut PrefixHits {
        &mut self.hits
    }
}

impl SegmentPolicy for AllPrefixes {
    fn on_word_matched(&mut self, walk: &mut Walk<'_>) -> Flow {
        self.hits.push(walk.len());
        Flow::Continue
    }

    fn on_match_finished(&mut self, walk: &mut Walk<'_>) {
        self.hits.push_final(walk.len());
    }

    fn on_unmatched(&mut self, walk: &mut Walk<'_>) {
        if let Some(longest) = self.hits.longest() {
            walk.reinject_from(longest);
        } else if self.output_prefix {
            self.hits.push(walk.len());
        }
    }

    fn next_token(&mut self, scanner: &mut Scanner) -> Result<Option<String>> {
        PrefixHits::drain(self, scanner, Self::hits)
    }

    fn reset(&mut self) {
        self.hits.clear();
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::AllPrefixes
    }
}
