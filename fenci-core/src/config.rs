//! Tokenizer configuration

use crate::classify::{IdeographRange, IDEOGRAPH_FIRST, IDEOGRAPH_LAST};
use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Segmentation policy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyKind {
    /// Longest (maximal) match
    #[default]
    Longest,
    /// Shortest match
    Shortest,
    /// Every dictionary prefix along a walk
    AllPrefixes,
    /// Prefix hits, keeping unmatched spans whole
    PrefixFirst,
    /// Prefer more, shorter dictionary words
    MaxCount,
}

impl PolicyKind {
    /// All policies, in display order
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::AllPrefixes,
        PolicyKind::PrefixFirst,
        PolicyKind::Longest,
        PolicyKind::Shortest,
        PolicyKind::MaxCount,
    ];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Longest => "longest",
            PolicyKind::Shortest => "shortest",
            PolicyKind::AllPrefixes => "all-prefixes",
            PolicyKind::PrefixFirst => "prefix-first",
            PolicyKind::MaxCount => "max-count",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "longest" | "max" | "maximal" => Ok(PolicyKind::Longest),
            "shortest" | "min" => Ok(PolicyKind::Shortest),
            "all-prefixes" | "prefix" | "prefixes" => Ok(PolicyKind::AllPrefixes),
            "prefix-first" => Ok(PolicyKind::PrefixFirst),
            "max-count" | "most" => Ok(PolicyKind::MaxCount),
            other => Err(CoreError::Config(format!("unknown policy '{other}'"))),
        }
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerConfig {
    pub(crate) policy: PolicyKind,
    pub(crate) output_prefix: bool,
    pub(crate) ideographs: IdeographRange,
}

impl TokenizerConfig {
    /// Create a configuration builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Configuration for `policy` with every other setting at its default
    pub fn with_policy(policy: PolicyKind) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Selected policy
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Whether partially matched spans are still emitted
    pub fn output_prefix(&self) -> bool {
        self.output_prefix
    }

    /// Codepoints that self-tokenize when not in the dictionary
    pub fn ideographs(&self) -> IdeographRange {
        self.ideographs
    }
}

/// Fluent builder for [`TokenizerConfig`]
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    policy: Option<PolicyKind>,
    output_prefix: Option<bool>,
    ideograph_range: Option<(u32, u32)>,
}

impl TokenizerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmentation policy
    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the policy by name
    pub fn policy_name(mut self, name: &str) -> Result<Self, CoreError> {
        self.policy = Some(name.parse()?);
        Ok(self)
    }

    /// Emit partially matched spans
    pub fn output_prefix(mut self, enabled: bool) -> Self {
        self.output_prefix = Some(enabled);
        self
    }

    /// Override the ideograph codepoint range (inclusive on both ends)
    pub fn ideograph_range(mut self, first: u32, last: u32) -> Self {
        self.ideograph_range = Some((first, last));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TokenizerConfig, CoreError> {
        let (first, last) = self
            .ideograph_range
            .unwrap_or((IDEOGRAPH_FIRST, IDEOGRAPH_LAST));

        if last > char::MAX as u32 {
            return Err(CoreError::Config(format!(
                "ideograph range end {last} is beyond the last codepoint"
            )));
        }
        let ideographs = IdeographRange::new(first, last).ok_or_else(|| {
            CoreError::Config(format!("ideograph range {first}..={last} is empty"))
        })?;

        Ok(TokenizerConfig {
            policy: self.policy.unwrap_or_default(),
            output_prefix: self.output_prefix.unwrap_or(false),
            ideographs,
        })
    }
}
