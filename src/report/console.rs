//! Human-readable console report.

use std::io::{self, Write};

use crate::analysis::{Extreme, PerDocumentStats};
use crate::app_controller::RunSummary;

fn attribution<T>(extreme: &Extreme<T>) -> &str {
    extreme.document.as_deref().unwrap_or("-")
}

/// Renders a [`RunSummary`] as text
pub struct ConsoleReport<'a> {
    summary: &'a RunSummary,
    top_k: usize,
}

impl<'a> ConsoleReport<'a> {
    /// Create a report; `top_k` bounds the global word list
    pub fn new(summary: &'a RunSummary, top_k: usize) -> Self {
        Self { summary, top_k }
    }

    /// Documents sorted by lexical richness, highest first, ties by name
    pub fn richness_ranking(&self) -> Vec<&'a PerDocumentStats> {
        let mut ranked: Vec<&PerDocumentStats> = self.summary.documents.iter().collect();
        ranked.sort_by(|a, b| {
            b.lexical_richness
                .total_cmp(&a.lexical_richness)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked
    }

    /// Write the full report
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let corpus = &self.summary.corpus;

        if corpus.document_count == 0 {
            writeln!(out, "No documents were analyzed.")?;
        }

        let top_words = corpus.top_global(self.top_k);
        if top_words.is_empty() {
            writeln!(out, "No significant words found after stopword removal.")?;
        } else {
            writeln!(out, "Top {} words (stopwords removed):", top_words.len())?;
            for (word, count) in &top_words {
                writeln!(out, "- {}: {}", word, count)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Words per song")?;
        writeln!(out, "Mean:          {:.2}", corpus.mean_word_count)?;
        writeln!(
            out,
            "Minimum:       {} (song: {})",
            corpus.min_word_count.value,
            attribution(&corpus.min_word_count)
        )?;
        writeln!(
            out,
            "Maximum:       {} (song: {})",
            corpus.max_word_count.value,
            attribution(&corpus.max_word_count)
        )?;

        writeln!(out)?;
        writeln!(out, "Lexical richness (TTR):")?;
        for doc in self.richness_ranking() {
            writeln!(out, "- {}: {:.4}", doc.name, doc.lexical_richness)?;
        }
        writeln!(
            out,
            "Highest lexical richness: {} ({:.4})",
            attribution(&corpus.max_richness),
            corpus.max_richness.value
        )?;
        writeln!(
            out,
            "Lowest lexical richness:  {} ({:.4})",
            attribution(&corpus.min_richness),
            corpus.min_richness.value
        )?;

        for doc in &self.summary.documents {
            writeln!(out)?;
            writeln!(out, "Top {} words in '{}':", doc.top_n_words.len(), doc.name)?;
            for (word, count) in &doc.top_n_words {
                writeln!(out, "- {}: {}", word, count)?;
            }
            match &doc.singleton_word {
                Some(word) => writeln!(out, "Longest word used once: {}", word)?,
                None => writeln!(out, "Longest word used once: (none)")?,
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "Song with the most unique words: '{}' with {} unique words.",
            attribution(&corpus.max_unique_count),
            corpus.max_unique_count.value
        )?;

        if !self.summary.failures.is_empty() {
            writeln!(out)?;
            writeln!(out, "Skipped {} document(s):", self.summary.failures.len())?;
            for failure in &self.summary.failures {
                writeln!(out, "- {:?}: {}", failure.path, failure.error)?;
            }
        }

        Ok(())
    }
}
