//! Dictionary sources and built dictionaries

use crate::error::Result;
use crate::loader::{discover, load_files, DEFAULT_EXTENSION};
use crate::words::WordSet;
use fenci_core::{Automaton, PolicyKind, Segmenter, TokenizerConfig, TokenizerConfigBuilder};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where dictionary words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Words held in memory
    Words(WordSet),
    /// Explicit list of line-delimited files, read in order
    Files(Vec<PathBuf>),
    /// Every file with the given extension below a directory
    Directory {
        /// Directory to search
        root: PathBuf,
        /// File suffix, without the leading dot
        extension: String,
    },
}

impl DictionarySource {
    /// In-memory word list
    pub fn words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        DictionarySource::Words(words.into_iter().collect())
    }

    /// Explicit file list
    pub fn files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        DictionarySource::Files(paths.into_iter().map(Into::into).collect())
    }

    /// Directory searched for `.dic` files
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        DictionarySource::Directory {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Change the suffix searched for; no effect on other sources
    pub fn with_extension(self, ext: &str) -> Self {
        match self {
            DictionarySource::Directory { root, .. } => DictionarySource::Directory {
                root,
                extension: ext.trim_start_matches('.').to_string(),
            },
            other => other,
        }
    }

    /// Files this source reads, in load order
    pub fn files_to_load(&self) -> Result<Vec<PathBuf>> {
        match self {
            DictionarySource::Words(_) => Ok(Vec::new()),
            DictionarySource::Files(paths) => Ok(paths.clone()),
            DictionarySource::Directory { root, extension } => discover(root, extension),
        }
    }

    /// Read every word this source provides
    pub fn load(&self) -> Result<WordSet> {
        match self {
            DictionarySource::Words(words) => Ok(words.clone()),
            _ => load_files(&self.files_to_load()?),
        }
    }

    /// Load the words and build the prefix automaton
    pub fn build_automaton(&self) -> Result<Automaton> {
        Ok(self.load()?.build_automaton())
    }

    /// Load the words, build the automaton and collect statistics
    pub fn build(&self) -> Result<Dictionary> {
        let files = self.files_to_load()?;
        let words = match self {
            DictionarySource::Words(words) => words.clone(),
            _ => load_files(&files)?,
        };
        let automaton = words.build_automaton();

        let stats = DictionaryStats {
            words: automaton.word_count(),
            files: files.len(),
            nodes: automaton.node_count(),
        };
        tracing::debug!(?stats, "dictionary built");

        Ok(Dictionary {
            automaton: Arc::new(automaton),
            stats,
        })
    }

    /// Build a segmenter for `policy` straight from this source
    pub fn create(&self, policy: PolicyKind, output_prefix: bool) -> Result<Segmenter> {
        self.build()?.segmenter(
            TokenizerConfig::builder()
                .policy(policy)
                .output_prefix(output_prefix),
        )
    }
}

/// Summary of a built dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Distinct words
    pub words: usize,
    /// Files read
    pub files: usize,
    /// Automaton nodes
    pub nodes: usize,
}

impl fmt::Display for DictionaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words from {} files ({} automaton nodes)",
            self.words, self.files, self.nodes
        )
    }
}

/// A built automaton together with how it was built
#[derive(Debug, Clone)]
pub struct Dictionary {
    automaton: Arc<Automaton>,
    stats: DictionaryStats,
}

impl Dictionary {
    /// Shared automaton
    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }

    /// Build statistics
    pub fn stats(&self) -> DictionaryStats {
        self.stats
    }

    /// Segmenter over this dictionary
    pub fn segmenter(&self, config: TokenizerConfigBuilder) -> Result<Segmenter> {
        Ok(Segmenter::from_automaton(
            Arc::clone(&self.automaton),
            config.build()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_words_source() {
        let dictionary = DictionarySource::words(["ab", "abcd"]).build().unwrap();
        assert_eq!(
            dictionary.stats(),
            DictionaryStats {
                words: 2,
                files: 0,
                nodes: 5,
            }
        );

        let segmenter = dictionary
            .segmenter(TokenizerConfig::builder().policy(PolicyKind::AllPrefixes))
            .unwrap();
        assert_eq!(segmenter.segment("abcd").unwrap(), vec!["ab", "abcd"]);
    }

    #[test]
    fn test_directory_source() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("brands")).unwrap();
        fs::write(temp_dir.path().join("brands/cars.dic"), "奥迪\n奔驰\n").unwrap();
        fs::write(temp_dir.path().join("places.dic"), "湖北\n").unwrap();
        fs::write(temp_dir.path().join("readme.md"), "ignored\n").unwrap();

        let source = DictionarySource::directory(temp_dir.path());
        let dictionary = source.build().unwrap();
        assert_eq!(dictionary.stats().words, 3);
        assert_eq!(dictionary.stats().files, 2);
        assert!(!dictionary.automaton().contains("ignored"));

        let txt = DictionarySource::directory(temp_dir.path()).with_extension(".md");
        assert_eq!(txt.load().unwrap().len(), 1);
    }

    #[test]
    fn test_create_per_policy() {
        let source = DictionarySource::words(["奥迪", "奥迪q5", "奔驰"]);
        let segmenter = source.create(PolicyKind::PrefixFirst, true).unwrap();
        assert_eq!(
            segmenter.segment("奥迪Q奔驰").unwrap(),
            vec!["奥迪", "奥迪Q", "奔驰"]
        );
        assert!(segmenter.config().output_prefix());
    }

    #[test]
    fn test_files_source_missing_file() {
        let err = DictionarySource::files(["/nonexistent/words.dic"])
            .build_automaton()
            .unwrap_err();
        assert!(matches!(err, DictError::NotFound(_)));
    }

    #[test]
    fn test_invalid_config_surfaces() {
        let dictionary = DictionarySource::words(["ab"]).build().unwrap();
        let err = dictionary
            .segmenter(TokenizerConfig::builder().ideograph_range(10, 5))
            .unwrap_err();
        assert!(matches!(err, DictError::Core(_)));
    }

    #[test]
    fn test_stats_display() {
        let stats = DictionaryStats {
            words: 3,
            files: 2,
            nodes: 10,
        };
        assert_eq!(stats.to_string(), "3 words from 2 files (10 automaton nodes)");
    }
}
