//! Dictionary-driven word segmentation for mixed Chinese/Latin/digit text
//!
//! A prefix [`Automaton`] is built once from a word list. Each [`Tokenizer`]
//! then walks one input stream against it, one codepoint at a time, and a
//! [`SegmentPolicy`] decides which spans become tokens:
//!
//! - [`PolicyKind::Longest`]: longest dictionary match
//! - [`PolicyKind::Shortest`]: shortest dictionary match
//! - [`PolicyKind::AllPrefixes`]: every dictionary prefix along a walk
//! - [`PolicyKind::PrefixFirst`]: prefixes, keeping unmatched spans whole
//! - [`PolicyKind::MaxCount`]: more, shorter words over fewer, longer ones
//!
//! Runs of ASCII letters or digits that are not in the dictionary are emitted
//! whole, and an ideograph with no dictionary match is its own token.
//!
//! # Example
//!
//! ```rust
//! use fenci_core::{PolicyKind, Segmenter};
//!
//! let segmenter = Segmenter::builder()
//!     .words(["ab", "abcd", "x"])
//!     .policy(PolicyKind::AllPrefixes)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(segmenter.segment("abcd").unwrap(), vec!["ab", "abcd"]);
//!
//! let longest = segmenter.with_policy(PolicyKind::Longest);
//! assert_eq!(longest.segment("abcd").unwrap(), vec!["abcd"]);
//! ```

#![warn(missing_docs)]

pub mod automaton;
pub mod classify;
pub mod config;
pub mod error;
pub mod input;
pub mod policy;
pub mod scanner;
pub mod segmenter;
pub mod tokenizer;

// Re-export key types
pub use automaton::{Automaton, Cursor};
pub use classify::{CharClass, Classifier, IdeographRange};
pub use config::{PolicyKind, TokenizerConfig, TokenizerConfigBuilder};
pub use error::{CoreError, Result};
pub use input::Input;
pub use policy::SegmentPolicy;
pub use scanner::{Flow, ScanState, Scanner, Walk};
pub use segmenter::{Segmenter, SegmenterBuilder};
pub use tokenizer::{Tokenizer, Tokens};
