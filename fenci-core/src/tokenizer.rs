//! Pull-based tokenizer: one scanner plus one policy

use crate::automaton::Automaton;
use crate::classify::{Classifier, IdeographRange};
use crate::config::{PolicyKind, TokenizerConfig};
use crate::error::Result;
use crate::input::Input;
use crate::policy::SegmentPolicy;
use crate::scanner::Scanner;
use std::sync::Arc;

/// Stateful tokenizer over a single input stream
///
/// Call [`Tokenizer::reset`] with an input, then [`Tokenizer::next_token`]
/// until it returns `Ok(None)`. After an error the tokenizer must be reset
/// before reuse.
pub struct Tokenizer {
    scanner: Scanner,
    policy: Box<dyn SegmentPolicy>,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("policy", &self.policy.kind())
            .field("scanner", &self.scanner)
            .finish()
    }
}

impl Tokenizer {
    /// Create a tokenizer for the configured policy
    pub fn new(automaton: Arc<Automaton>, config: &TokenizerConfig) -> Self {
        Self {
            scanner: Scanner::new(automaton, Classifier::new(config.ideographs())),
            policy: config.policy().create(config.output_prefix()),
        }
    }

    /// Create a tokenizer around an explicit policy instance
    pub fn with_policy(
        automaton: Arc<Automaton>,
        ideographs: IdeographRange,
        policy: Box<dyn SegmentPolicy>,
    ) -> Self {
        Self {
            scanner: Scanner::new(automaton, Classifier::new(ideographs)),
            policy,
        }
    }

    /// Attach a new input, discarding all state from the previous one
    pub fn reset(&mut self, input: impl Into<Input>) {
        self.scanner.reset(input.into());
        self.policy.reset();
    }

    /// Next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>> {
        self.policy.next_token(&mut self.scanner)
    }

    /// Iterate over the remaining tokens
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }

    /// Reset onto `text` and collect every token
    pub fn segment(&mut self, text: &str) -> Result<Vec<String>> {
        self.reset(Input::from_text(text));
        self.tokens().collect()
    }

    /// Active policy
    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Whether the current input has been fully consumed
    pub fn is_finished(&self) -> bool {
        self.scanner.is_finished()
    }
}

/// Iterator over a tokenizer's remaining tokens
///
/// Stops after the first error.
#[derive(Debug)]
pub struct Tokens<'a> {
    tokenizer: &'a mut Tokenizer,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::policy::Shortest;

    fn tokenizer(words: &[&str], policy: PolicyKind, output_prefix: bool) -> Tokenizer {
        let config = TokenizerConfig::builder()
            .policy(policy)
            .output_prefix(output_prefix)
            .build()
            .unwrap();
        Tokenizer::new(Arc::new(Automaton::build(words.iter().copied())), &config)
    }

    #[test]
    fn test_unreset_tokenizer_is_empty() {
        let mut t = tokenizer(&["ab"], PolicyKind::Longest, false);
        assert_eq!(t.next_token().unwrap(), None);
    }

    #[test]
    fn test_exhausted_tokenizer_stays_exhausted() {
        let mut t = tokenizer(&["ab"], PolicyKind::AllPrefixes, false);
        t.reset("ab");
        assert_eq!(t.next_token().unwrap().as_deref(), Some("ab"));
        assert_eq!(t.next_token().unwrap(), None);
        assert_eq!(t.next_token().unwrap(), None);
        assert!(t.is_finished());
    }

    #[test]
    fn test_segment_resets() {
        let mut t = tokenizer(&["ab", "abcd"], PolicyKind::Longest, false);
        assert_eq!(t.segment("abcd").unwrap(), vec!["abcd"]);
        assert_eq!(t.segment("ab").unwrap(), vec!["ab"]);
    }

    #[test]
    fn test_with_policy() {
        let automaton = Arc::new(Automaton::build(["ab", "abcd"]));
        let mut t = Tokenizer::with_policy(
            automaton,
            IdeographRange::default(),
            Box::new(Shortest::new(false)),
        );
        assert_eq!(t.policy_kind(), PolicyKind::Shortest);
        assert_eq!(t.segment("ab").unwrap(), vec!["ab"]);
    }

    #[test]
    fn test_with_policy_narrow_range() {
        let automaton = Arc::new(Automaton::build(["ab"]));
        let narrow = IdeographRange::new(0x4E00, 0x9FFF).unwrap();
        let mut t = Tokenizer::with_policy(automaton, narrow, Box::new(Shortest::new(false)));
        assert_eq!(t.segment("ab한中").unwrap(), vec!["ab", "中"]);
    }

    #[test]
    fn test_tokens_stop_after_error() {
        let mut t = tokenizer(&[], PolicyKind::Longest, false);
        t.reset(Input::from_bytes(vec![b'a', b' ', 0xFF, b'b']));
        let results: Vec<_> = t.tokens().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), "a");
        assert!(matches!(results[1], Err(CoreError::InvalidUtf8 { position: 2 })));
    }

    #[test]
    fn test_debug_shows_policy() {
        let t = tokenizer(&[], PolicyKind::MaxCount, false);
        assert!(format!("{t:?}").contains("MaxCount"));
    }
}
