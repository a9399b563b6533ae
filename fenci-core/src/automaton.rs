//! Prefix automaton over dictionary words
//!
//! Words are stored as UTF-8 byte paths in a compact, immutable trie laid out
//! in flat arrays. Callers step one codepoint at a time; a codepoint whose
//! encoding spans several bytes either consumes all of them or fails as a
//! whole, so partially-consumed codepoints are never observable.

use std::collections::BTreeSet;

/// A position in the automaton reached by consuming some codepoint prefix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(u32);

impl Cursor {
    /// Node index behind this cursor
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable dictionary automaton
///
/// Built once from a word list and shared read-only between any number of
/// scanners. Traversal never mutates the automaton, so it is `Send + Sync`
/// without locking.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// Edge range of node `n` is `offsets[n]..offsets[n + 1]`
    offsets: Vec<u32>,
    /// Edge labels, sorted within each node
    labels: Vec<u8>,
    /// Edge targets, parallel to `labels`
    targets: Vec<u32>,
    /// Whether the path to a node spells a complete word
    finals: Vec<bool>,
    word_count: usize,
}

/// Mutable trie node used during construction only
#[derive(Default)]
struct BuildNode {
    edges: Vec<(u8, u32)>,
    is_final: bool,
}

impl Automaton {
    /// Build an automaton from a collection of words
    ///
    /// Words are lower-cased, de-duplicated and sorted before insertion, so the
    /// result does not depend on iteration order. Empty words are ignored.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self::from_sorted(&sorted)
    }

    /// Build from an already sorted, de-duplicated, lower-cased word set
    ///
    /// Empty words are skipped; the root never accepts.
    pub fn from_sorted(words: &BTreeSet<String>) -> Self {
        let mut nodes = vec![BuildNode::default()];
        let mut word_count = 0;

        for word in words.iter().filter(|w| !w.is_empty()) {
            word_count += 1;
            let mut node = 0usize;
            for &byte in word.as_bytes() {
                let existing = nodes[node]
                    .edges
                    .iter()
                    .find(|(label, _)| *label == byte)
                    .map(|&(_, target)| target as usize);
                node = match existing {
                    Some(target) => target,
                    None => {
                        let target = nodes.len();
                        nodes.push(BuildNode::default());
                        nodes[node].edges.push((byte, target as u32));
                        target
                    }
                };
            }
            nodes[node].is_final = true;
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut labels = Vec::with_capacity(nodes.len());
        let mut targets = Vec::with_capacity(nodes.len());
        let mut finals = Vec::with_capacity(nodes.len());

        offsets.push(0);
        for node in &mut nodes {
            node.edges.sort_unstable_by_key(|(label, _)| *label);
            for &(label, target) in &node.edges {
                labels.push(label);
                targets.push(target);
            }
            offsets.push(labels.len() as u32);
            finals.push(node.is_final);
        }

        tracing::debug!(
            words = word_count,
            nodes = finals.len(),
            edges = labels.len(),
            "built dictionary automaton"
        );

        Self {
            offsets,
            labels,
            targets,
            finals,
            word_count,
        }
    }

    /// Cursor at the root, before any codepoint has been consumed
    pub fn start(&self) -> Cursor {
        Cursor(0)
    }

    /// Consume one codepoint
    ///
    /// Returns `None` when the automaton has no transition for `ch`. The caller
    /// is responsible for case folding.
    pub fn step(&self, cursor: Cursor, ch: char) -> Option<Cursor> {
        let mut buf = [0u8; 4];
        ch.encode_utf8(&mut buf)
            .as_bytes()
            .iter()
            .try_fold(cursor.0, |node, &byte| self.step_byte(node, byte))
            .map(Cursor)
    }

    #[inline]
    fn step_byte(&self, node: u32, byte: u8) -> Option<u32> {
        let start = self.offsets[node as usize] as usize;
        let end = self.offsets[node as usize + 1] as usize;
        self.labels[start..end]
            .binary_search(&byte)
            .ok()
            .map(|i| self.targets[start + i])
    }

    /// Whether the codepoints consumed to reach `cursor` form a dictionary word
    pub fn is_complete(&self, cursor: Cursor) -> bool {
        self.finals[cursor.index()]
    }

    /// Whether `word` (after lower-casing) is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        let mut cursor = self.start();
        for ch in word.to_lowercase().chars() {
            match self.step(cursor, ch) {
                Some(next) => cursor = next,
                None => return false,
            }
        }
        cursor != self.start() && self.is_complete(cursor)
    }

    /// Number of distinct words
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of trie nodes
    pub fn node_count(&self) -> usize {
        self.finals.len()
    }

    /// True when no words were inserted
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
