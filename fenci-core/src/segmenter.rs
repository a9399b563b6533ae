//! Segmenter facade: a shared automaton plus a configuration

use crate::automaton::Automaton;
use crate::config::{PolicyKind, TokenizerConfig, TokenizerConfigBuilder};
use crate::error::{CoreError, Result};
use crate::tokenizer::Tokenizer;
use std::sync::Arc;

/// Factory for tokenizers sharing one dictionary automaton
///
/// Cloning a `Segmenter` is cheap; every clone and every tokenizer it hands
/// out reads the same automaton.
#[derive(Debug, Clone)]
pub struct Segmenter {
    automaton: Arc<Automaton>,
    config: TokenizerConfig,
}

impl Segmenter {
    /// Create a builder
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// Build the automaton from `words`
    pub fn from_words<I, S>(words: I, config: TokenizerConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_automaton(Arc::new(Automaton::build(words)), config)
    }

    /// Reuse an already built automaton
    pub fn from_automaton(automaton: Arc<Automaton>, config: TokenizerConfig) -> Self {
        Self { automaton, config }
    }

    /// Fresh tokenizer with this segmenter's configuration
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(Arc::clone(&self.automaton), &self.config)
    }

    /// Same dictionary, different policy
    pub fn with_policy(&self, policy: PolicyKind) -> Self {
        Self {
            automaton: Arc::clone(&self.automaton),
            config: TokenizerConfig {
                policy,
                ..self.config
            },
        }
    }

    /// Segment `text` in one call
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        self.tokenizer().segment(text)
    }

    /// Shared automaton
    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }

    /// Active configuration
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }
}

/// Builder for [`Segmenter`]
///
/// A dictionary must be supplied, either as words or as a built automaton;
/// `build` fails otherwise.
#[derive(Debug, Default)]
pub struct SegmenterBuilder {
    automaton: Option<Arc<Automaton>>,
    config: TokenizerConfigBuilder,
}

impl SegmenterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the dictionary from `words`
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.automaton = Some(Arc::new(Automaton::build(words)));
        self
    }

    /// Use an existing automaton
    pub fn automaton(mut self, automaton: Arc<Automaton>) -> Self {
        self.automaton = Some(automaton);
        self
    }

    /// Set the policy
    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.config = self.config.policy(policy);
        self
    }

    /// Emit partially matched spans
    pub fn output_prefix(mut self, enabled: bool) -> Self {
        self.config = self.config.output_prefix(enabled);
        self
    }

    /// Override the ideograph range
    pub fn ideograph_range(mut self, first: u32, last: u32) -> Self {
        self.config = self.config.ideograph_range(first, last);
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<Segmenter> {
        let automaton = self
            .automaton
            .ok_or_else(|| CoreError::Config("no dictionary supplied".into()))?;
        let config = self.config.build()?;
        Ok(Segmenter::from_automaton(automaton, config))
    }
}
