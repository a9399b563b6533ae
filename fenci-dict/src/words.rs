//! In-memory word sets

use fenci_core::Automaton;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::io::{self, BufRead};

/// Sorted, de-duplicated dictionary words
///
/// Words are trimmed and lower-cased on insertion; blank entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise and insert a word
    ///
    /// Returns `true` if the word was new. Blank words are never inserted.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    /// Read one word per line from `reader`
    ///
    /// Returns how many new words were added. A leading byte order mark is
    /// ignored.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut added = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = if index == 0 {
                line.trim_start_matches('\u{feff}')
            } else {
                line.as_str()
            };
            if self.insert(line) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Whether `word` is in the set (compared after normalisation)
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in ascending order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }

    /// Build the prefix automaton for this set
    pub fn build_automaton(&self) -> Automaton {
        Automaton::from_sorted(&self.words)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Read a line-delimited word list
pub fn read_words<R: BufRead>(reader: R) -> io::Result<WordSet> {
    let mut set = WordSet::new();
    set.read_from(reader)?;
    Ok(set)
}
