//! Stopword filtering
//!
//! The stopword list is loaded once per run from a newline-delimited file and is
//! read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use log::debug;

use crate::errors::CorpusError;
use crate::file_utils::FileManager;

/// Immutable set of normalized stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from a list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-delimited list: entries are trimmed and lowercased, blank lines skipped
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    /// Load the stopword list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            return Err(CorpusError::Config(format!(
                "Stopword file not found: {:?}",
                path
            )));
        }

        let set = Self::parse(&FileManager::read_text(path)?);
        debug!("Loaded {} stopwords from {:?}", set.len(), path);
        Ok(set)
    }

    /// Check if a word is a stopword
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Remove stopwords, keeping the order of the remaining tokens
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.contains(t))
            .map(|t| t.to_string())
            .collect()
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
