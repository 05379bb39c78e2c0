/*!
 * Corpus-wide aggregation of per-document statistics.
 *
 * Documents are folded in canonical order (sorted by name). Extremes are only
 * replaced on a strict improvement, so the first document reaching a value keeps
 * the attribution.
 */

use serde::Serialize;

use crate::analysis::document::PerDocumentStats;
use crate::analysis::frequency::FrequencyTable;

/// An extreme value and the document it belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extreme<T> {
    /// The value
    pub value: T,
    /// Document holding it; `None` for an empty corpus
    pub document: Option<String>,
}

/// Statistics over the whole corpus
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusStats {
    /// Number of documents aggregated
    pub document_count: usize,
    /// Mean tokens per document
    pub mean_word_count: f64,
    /// Shortest document
    pub min_word_count: Extreme<usize>,
    /// Longest document
    pub max_word_count: Extreme<usize>,
    /// Lowest type-token ratio
    pub min_richness: Extreme<f64>,
    /// Highest type-token ratio
    pub max_richness: Extreme<f64>,
    /// Most distinct tokens
    pub max_unique_count: Extreme<usize>,
    /// Raw occurrence count of each stopword-filtered word across the corpus
    pub global_frequency: FrequencyTable,
    /// Number of documents containing each stopword-filtered word
    pub presence_counts: FrequencyTable,
}

impl CorpusStats {
    /// Zero-value statistics for an empty corpus
    pub fn empty() -> Self {
        Self::default()
    }

    /// The `k` most frequent words across the corpus
    pub fn top_global(&self, k: usize) -> Vec<(String, usize)> {
        self.global_frequency.most_common(k)
    }

    /// The `k` words present in the most documents
    pub fn top_presence(&self, k: usize) -> Vec<(String, usize)> {
        self.presence_counts.most_common(k)
    }
}

/// Sort documents into canonical order (by name, stable for equal names)
pub fn canonical_order(stats: &[PerDocumentStats]) -> Vec<&PerDocumentStats> {
    let mut ordered: Vec<&PerDocumentStats> = stats.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));
    ordered
}

fn fold_extreme<T, V, B>(documents: &[&PerDocumentStats], value: V, improves: B) -> Extreme<T>
where
    T: Copy + Default,
    V: Fn(&PerDocumentStats) -> T,
    B: Fn(T, T) -> bool,
{
    documents
        .iter()
        .copied()
        .fold(None, |best: Option<Extreme<T>>, doc| {
            let candidate = value(doc);
            match best {
                Some(current) if !improves(candidate, current.value) => Some(current),
                _ => Some(Extreme {
                    value: candidate,
                    document: Some(doc.name.clone()),
                }),
            }
        })
        .unwrap_or_default()
}

/// Fold per-document statistics into corpus statistics
pub fn aggregate(stats: &[PerDocumentStats]) -> CorpusStats {
    if stats.is_empty() {
        return CorpusStats::empty();
    }

    let documents = canonical_order(stats);
    let total_words: usize = documents.iter().map(|d| d.word_count).sum();

    let mut global_frequency = FrequencyTable::new();
    let mut presence_counts = FrequencyTable::new();
    for doc in &documents {
        for (word, count) in doc.filtered_frequencies.iter() {
            global_frequency.add(word, count);
            presence_counts.add(word, 1);
        }
    }

    CorpusStats {
        document_count: documents.len(),
        mean_word_count: total_words as f64 / documents.len() as f64,
        min_word_count: fold_extreme(&documents, |d| d.word_count, |a, b| a < b),
        max_word_count: fold_extreme(&documents, |d| d.word_count, |a, b| a > b),
        min_richness: fold_extreme(&documents, |d| d.lexical_richness, |a, b| a < b),
        max_richness: fold_extreme(&documents, |d| d.lexical_richness, |a, b| a > b),
        max_unique_count: fold_extreme(&documents, |d| d.unique_word_count, |a, b| a > b),
        global_frequency,
        presence_counts,
    }
}
