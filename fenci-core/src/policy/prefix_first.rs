//! Prefix-preferred match

use super::{AllPrefixes, PrefixHits, SegmentPolicy};
use crate::config::PolicyKind;
use crate::error::Result;
use crate::scanner::{Flow, Scanner, Walk};

/// All-prefixes matching that keeps an unmatched span whole
///
/// With `output_prefix`, a walk that overshoots its last dictionary hit is
/// emitted as is: for "奥迪Q奔驰" with "奥迪", "奥迪q5" and "奔驰" in the dictionary
/// the tokens are "奥迪", "奥迪Q", "奔驰". Without it, the overshoot is given
/// back and retried from the longest hit ("奥迪", "Q", "奔驰").
#[derive(Debug, Clone, Default)]
pub struct PrefixFirst {
    inner: AllPrefixes,
}

impl PrefixFirst {
    /// Create the policy
    pub fn new(output_prefix: bool) -> Self {
        Self {
            inner: AllPrefixes::new(output_prefix),
        }
    }

    fn hits(&mut self) -> &mut PrefixHits {
        &mut self.inner.hits
    }
}

impl SegmentPolicy for PrefixFirst {
    fn on_word_matched(&mut self, walk: &mut Walk<'_>) -> Flow {
        self.inner.on_word_matched(walk)
    }

    fn on_match_finished(&mut self, walk: &mut Walk<'_>) {
        self.inner.on_match_finished(walk);
    }

    fn on_unmatched(&mut self, walk: &mut Walk<'_>) {
        if self.inner.output_prefix {
            self.inner.hits.push(walk.len());
            return;
        }
        match self.inner.hits.longest() {
            Some(longest) => walk.reinject_from(longest),
            // Rescanning the whole span would loop; skip its first codepoint.
            None => walk.reinject_from(1),
        }
    }

    fn next_token(&mut self, scanner: &mut Scanner) -> Result<Option<String>> {
        PrefixHits::drain(self, scanner, Self::hits)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::PrefixFirst
    }
}
