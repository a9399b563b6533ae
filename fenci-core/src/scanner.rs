//! Streaming scan engine
//!
//! One [`Scanner`] owns a single pass over one input stream. Each call to
//! [`Scanner::walk`] extends a match against the dictionary automaton as far
//! as the automaton and the active policy allow, reporting events through the
//! [`SegmentPolicy`] callbacks. Codepoints a policy gives back are kept in a
//! LIFO reinjection buffer and re-read before the live stream.

use crate::automaton::Automaton;
use crate::classify::{fold_case, is_ascii_letter, is_blank, is_digit, is_line_delimiter, Classifier};
use crate::error::Result;
use crate::input::{CharSource, Input};
use crate::policy::SegmentPolicy;
use std::sync::Arc;

/// Typical upper bound on pending reinjected codepoints
const REINJECT_CAPACITY: usize = 50;

/// Scanner lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// More walks may produce events
    Scanning,
    /// Stream exhausted and nothing left to re-read
    Finished,
}

/// Answer to [`SegmentPolicy::on_word_matched`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep extending the match
    Continue,
    /// End the walk at the current word
    Stop,
}

/// Read-only view of the current walk handed to policy callbacks
///
/// Besides the matched codepoints, the view exposes the one mutation a policy
/// may request: giving a suffix of the match back to the input.
#[derive(Debug)]
pub struct Walk<'a> {
    matched: &'a [char],
    reinject: &'a mut Vec<char>,
}

impl Walk<'_> {
    /// Codepoints consumed by this walk
    pub fn chars(&self) -> &[char] {
        self.matched
    }

    /// Number of codepoints consumed by this walk
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    /// True when nothing was consumed
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Give `chars()[begin..]` back to the input
    ///
    /// The next walk re-reads them in their original order, starting with
    /// the codepoint at `begin`.
    pub fn reinject_from(&mut self, begin: usize) {
        if begin < self.matched.len() {
            self.reinject
                .extend(self.matched[begin..].iter().rev().copied());
        }
    }
}

/// Scan engine shared by every segmentation policy
pub struct Scanner {
    automaton: Arc<Automaton>,
    classifier: Classifier,
    source: CharSource,
    /// Codepoints to re-read, most recent last
    reinject: Vec<char>,
    /// Codepoints consumed by the current walk
    matched: Vec<char>,
    state: ScanState,
    /// Whether the last pull hit end of stream
    at_eof: bool,
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("state", &self.state)
            .field("matched", &self.matched)
            .field("reinject", &self.reinject)
            .finish_non_exhaustive()
    }
}

impl Scanner {
    /// Create a scanner with no input attached
    ///
    /// Until [`Scanner::reset`] supplies an input, walks see an empty stream.
    pub fn new(automaton: Arc<Automaton>, classifier: Classifier) -> Self {
        Self {
            automaton,
            classifier,
            source: CharSource::empty(),
            reinject: Vec::with_capacity(REINJECT_CAPACITY),
            matched: Vec::new(),
            state: ScanState::Scanning,
            at_eof: false,
        }
    }

    /// Start over on a new input
    pub fn reset(&mut self, input: Input) {
        tracing::trace!(?input, "scanner reset");
        self.source = CharSource::new(input);
        self.reinject.clear();
        self.matched.clear();
        self.state = ScanState::Scanning;
        self.at_eof = false;
    }

    /// Current lifecycle state
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Shorthand for `state() == ScanState::Finished`
    pub fn is_finished(&self) -> bool {
        self.state == ScanState::Finished
    }

    /// Codepoints consumed by the most recent walk
    pub fn matched(&self) -> &[char] {
        &self.matched
    }

    /// The first `len` codepoints of the most recent walk as a string
    pub fn text(&self, len: usize) -> String {
        self.matched[..len.min(self.matched.len())].iter().collect()
    }

    /// Number of codepoints waiting to be re-read
    pub fn pending_reinjection(&self) -> usize {
        self.reinject.len()
    }

    /// Shared automaton
    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }

    /// Run one walk, reporting events to `policy`
    pub fn walk<P: SegmentPolicy + ?Sized>(&mut self, policy: &mut P) -> Result<()> {
        let automaton = Arc::clone(&self.automaton);
        let mut cursor = automaton.start();
        let mut first = true;
        self.matched.clear();

        while let Some(ch) = self.pull()? {
            if is_line_delimiter(ch) {
                continue;
            }

            match automaton.step(cursor, fold_case(ch)) {
                Some(next) => {
                    self.matched.push(ch);
                    first = false;
                    cursor = next;
                    if automaton.is_complete(cursor)
                        && !is_blank(&self.matched)
                        && policy.on_word_matched(&mut self.view()) == Flow::Stop
                    {
                        return Ok(());
                    }
                }
                None => {
                    if !first && !ch.is_whitespace() {
                        self.reinject.push(ch);
                    } else if is_ascii_letter(ch) || is_digit(ch) {
                        self.matched.push(ch);
                    } else if self.classifier.is_ideograph(ch) {
                        self.matched.push(ch);
                        policy.on_match_finished(&mut self.view());
                        return Ok(());
                    }
                    break;
                }
            }
        }

        if is_blank(&self.matched) {
            self.update_state();
            return Ok(());
        }

        if automaton.is_complete(cursor) {
            policy.on_match_finished(&mut self.view());
        } else if self.matched.iter().all(|&c| is_ascii_letter(c)) {
            self.extend_run(is_ascii_letter)?;
            policy.on_match_finished(&mut self.view());
        } else if self.matched.iter().all(|&c| is_digit(c)) {
            self.extend_run(is_digit)?;
            policy.on_match_finished(&mut self.view());
        } else {
            policy.on_unmatched(&mut self.view());
        }

        self.update_state();
        Ok(())
    }

    fn view(&mut self) -> Walk<'_> {
        Walk {
            matched: &self.matched,
            reinject: &mut self.reinject,
        }
    }

    fn pull(&mut self) -> Result<Option<char>> {
        if let Some(ch) = self.reinject.pop() {
            self.at_eof = false;
            return Ok(Some(ch));
        }
        let next = self.source.next_char()?;
        self.at_eof = next.is_none();
        Ok(next)
    }

    /// Keep consuming while `accept` holds; the first rejected codepoint is
    /// given back.
    fn extend_run(&mut self, accept: fn(char) -> bool) -> Result<()> {
        while let Some(ch) = self.pull()? {
            if accept(ch) {
                self.matched.push(ch);
            } else {
                self.reinject.push(ch);
                break;
            }
        }
        Ok(())
    }

    fn update_state(&mut self) {
        if self.at_eof && self.reinject.is_empty() {
            self.state = ScanState::Finished;
        }
    }
}
