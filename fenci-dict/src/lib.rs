//! Dictionary loading for fenci
//!
//! Dictionaries are plain UTF-8 text with one word per line. Words are
//! trimmed and lower-cased; blank lines are skipped. A [`DictionarySource`]
//! names where the words come from (memory, a list of files, or a directory
//! searched breadth first for `.dic` files) and builds the shared
//! [`fenci_core::Automaton`] from them.
//!
//! ```rust
//! use fenci_core::{PolicyKind, TokenizerConfig};
//! use fenci_dict::DictionarySource;
//!
//! let dictionary = DictionarySource::words(["湖北", "湖北省"]).build().unwrap();
//! let segmenter = dictionary
//!     .segmenter(TokenizerConfig::builder().policy(PolicyKind::Longest))
//!     .unwrap();
//!
//! assert_eq!(segmenter.segment("湖北省武汉").unwrap(), vec!["湖北省", "武", "汉"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod source;
pub mod words;

pub use error::{DictError, Result};
pub use loader::{collect_files, discover, load_file, load_files, DEFAULT_EXTENSION};
pub use source::{Dictionary, DictionarySource, DictionaryStats};
pub use words::{read_words, WordSet};
