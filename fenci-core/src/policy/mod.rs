//! Segmentation policies
//!
//! A policy decides, from the scanner's callbacks, which spans become tokens,
//! what is given back for another walk, and when a walk stops. All policies
//! drive the same [`Scanner`]; they differ only in the three callbacks and in
//! how [`SegmentPolicy::next_token`] drains their pending state.

mod all_prefixes;
mod longest;
mod max_count;
mod prefix_first;
mod shortest;

pub use all_prefixes::AllPrefixes;
pub use longest::Longest;
pub use max_count::MaxCount;
pub use prefix_first::PrefixFirst;
pub use shortest::Shortest;

use crate::config::PolicyKind;
use crate::error::Result;
use crate::scanner::{Flow, Scanner, Walk};
use std::collections::VecDeque;

/// Callback contract between the scan engine and a segmentation policy
pub trait SegmentPolicy: Send {
    /// The walked prefix is itself a dictionary word
    fn on_word_matched(&mut self, walk: &mut Walk<'_>) -> Flow;

    /// The walk ended on a dictionary word, an extended ASCII-letter or digit
    /// run, or a lone ideograph
    fn on_match_finished(&mut self, walk: &mut Walk<'_>);

    /// The walk ended without landing on a dictionary word
    fn on_unmatched(&mut self, walk: &mut Walk<'_>);

    /// Produce the next token, walking as many times as needed
    fn next_token(&mut self, scanner: &mut Scanner) -> Result<Option<String>>;

    /// Drop all pending state
    fn reset(&mut self);

    /// Which policy this is
    fn kind(&self) -> PolicyKind;
}

impl PolicyKind {
    /// Instantiate the policy
    pub fn create(self, output_prefix: bool) -> Box<dyn SegmentPolicy> {
        match self {
            PolicyKind::Longest => Box::new(Longest::new(output_prefix)),
            PolicyKind::Shortest => Box::new(Shortest::new(output_prefix)),
            PolicyKind::AllPrefixes => Box::new(AllPrefixes::new(output_prefix)),
            PolicyKind::PrefixFirst => Box::new(PrefixFirst::new(output_prefix)),
            PolicyKind::MaxCount => Box::new(MaxCount::new(output_prefix)),
        }
    }
}

/// Match lengths recorded along one walk, oldest (shortest) first
#[derive(Debug, Default, Clone)]
pub(crate) struct PrefixHits {
    lengths: VecDeque<usize>,
}

impl PrefixHits {
    pub(crate) fn push(&mut self, len: usize) {
        self.lengths.push_back(len);
    }

    /// Record the walk's final length unless it was already the last hit
    pub(crate) fn push_final(&mut self, len: usize) {
        if self.lengths.back() != Some(&len) {
            self.lengths.push_back(len);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.lengths.pop_front()
    }

    pub(crate) fn shortest(&self) -> Option<usize> {
        self.lengths.front().copied()
    }

    pub(crate) fn longest(&self) -> Option<usize> {
        self.lengths.back().copied()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.lengths.clear();
    }

    /// Walk until a hit is pending or the scanner is finished, then take the
    /// oldest hit as a token
    pub(crate) fn drain<P>(
        policy: &mut P,
        scanner: &mut Scanner,
        hits: fn(&mut P) -> &mut PrefixHits,
    ) -> Result<Option<String>>
    where
        P: SegmentPolicy,
    {
        while hits(policy).is_empty() && !scanner.is_finished() {
            scanner.walk(policy)?;
        }
        Ok(hits(policy).pop().map(|len| scanner.text(len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_hits_order() {
        let mut hits = PrefixHits::default();
        hits.push(2);
        hits.push(4);
        hits.push_final(4);
        assert_eq!(hits.shortest(), Some(2));
        assert_eq!(hits.longest(), Some(4));
        assert_eq!(hits.pop(), Some(2));
        assert_eq!(hits.pop(), Some(4));
        assert!(hits.is_empty());

        hits.push_final(3);
        assert_eq!(hits.longest(), Some(3));
        hits.clear();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_create_matches_kind() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.create(false).kind(), kind);
        }
    }
}
