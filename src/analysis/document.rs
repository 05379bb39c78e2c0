/*!
 * Per-document statistics.
 *
 * Every function here depends only on one document's tokens plus the shared,
 * read-only stopword set and theme dictionary.
 */

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::analysis::frequency::FrequencyTable;
use crate::app_config::AnalysisConfig;
use crate::lyrics::{tokenize, StopwordSet, ThemeDictionary};

/// Statistics for a single document
#[derive(Debug, Clone, Serialize)]
pub struct PerDocumentStats {
    /// Document name
    pub name: String,
    /// Number of tokens
    pub word_count: usize,
    /// Number of distinct tokens
    pub unique_word_count: usize,
    /// Type-token ratio in [0, 1]
    pub lexical_richness: f64,
    /// Most frequent words, at most N
    pub top_n_words: Vec<(String, usize)>,
    /// Words counted more often than the threshold, in first-seen order
    pub repeated_words: Vec<(String, usize)>,
    /// Theme to number of distinct matching keywords
    pub themes: BTreeMap<String, usize>,
    /// Longest stopword-filtered word occurring exactly once
    pub singleton_word: Option<String>,
    /// Stopword-filtered counts, consumed by the corpus aggregator
    #[serde(skip)]
    pub filtered_frequencies: FrequencyTable,
}

/// The `n` most frequent tokens, ties broken by first occurrence
pub fn top_n_words<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<(String, usize)> {
    FrequencyTable::from_tokens(tokens).most_common(n)
}

/// Distinct tokens over total tokens, 0 for an empty sequence
pub fn lexical_richness<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    unique.len() as f64 / tokens.len() as f64
}

/// Tokens occurring strictly more than `threshold` times
pub fn repeated_words<S: AsRef<str>>(tokens: &[S], threshold: usize) -> Vec<(String, usize)> {
    repeated_from_table(&FrequencyTable::from_tokens(tokens), threshold)
}

fn repeated_from_table(table: &FrequencyTable, threshold: usize) -> Vec<(String, usize)> {
    table
        .iter()
        .filter(|(_, count)| *count > threshold)
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

/// Count distinct keywords of each theme present in the unique token set.
///
/// Themes without any match are left out.
pub fn detect_themes(unique_tokens: &HashSet<&str>, themes: &ThemeDictionary) -> BTreeMap<String, usize> {
    themes
        .iter()
        .filter_map(|(theme, keywords)| {
            let matched = keywords
                .iter()
                .filter(|k| unique_tokens.contains(k.as_str()))
                .count();
            (matched > 0).then(|| (theme.to_string(), matched))
        })
        .collect()
}

/// Longest filtered token occurring exactly once; ties go to the lexicographically first
pub fn singleton_word<S: AsRef<str>>(filtered_tokens: &[S]) -> Option<String> {
    singleton_from_table(&FrequencyTable::from_tokens(filtered_tokens))
}

fn singleton_from_table(table: &FrequencyTable) -> Option<String> {
    table
        .iter()
        .filter(|(_, count)| *count == 1)
        .map(|(word, _)| word)
        .min_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        })
        .map(|word| word.to_string())
}

/// Computes [`PerDocumentStats`] with shared, immutable configuration
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer<'a> {
    stopwords: &'a StopwordSet,
    themes: &'a ThemeDictionary,
    config: AnalysisConfig,
}

impl<'a> DocumentAnalyzer<'a> {
    /// Create an analyzer
    pub fn new(stopwords: &'a StopwordSet, themes: &'a ThemeDictionary, config: AnalysisConfig) -> Self {
        Self {
            stopwords,
            themes,
            config,
        }
    }

    /// Analyze one cleaned document
    pub fn analyze(&self, name: &str, cleaned_text: &str) -> PerDocumentStats {
        let tokens = tokenize(cleaned_text);
        let table = FrequencyTable::from_tokens(&tokens);
        let unique: HashSet<&str> = table.iter().map(|(word, _)| word).collect();

        let filtered = self.stopwords.filter(&tokens);
        let filtered_frequencies = FrequencyTable::from_tokens(&filtered);

        PerDocumentStats {
            name: name.to_string(),
            word_count: tokens.len(),
            unique_word_count: table.len(),
            lexical_richness: lexical_richness(&tokens),
            top_n_words: table.most_common(self.config.top_n),
            repeated_words: repeated_from_table(&table, self.config.repeated_threshold),
            themes: detect_themes(&unique, self.themes),
            singleton_word: singleton_from_table(&filtered_frequencies),
            filtered_frequencies,
        }
    }
}
