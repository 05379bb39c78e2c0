/*!
 * Ordered word frequency table.
 *
 * Words keep the order in which they were first seen. Rankings sort by count
 * descending and fall back to that first-seen order, so equal counts always
 * come out in the same order for the same input.
 */

use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Word counts in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a token sequence
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref(), 1);
        }
        table
    }

    /// Add `count` occurrences of `word`
    pub fn add(&mut self, word: &str, count: usize) {
        match self.index.get(word) {
            Some(&position) => self.entries[position].1 += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), count));
            }
        }
    }

    /// Count of a word, 0 if absent
    pub fn get(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// Whether the word was seen
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `n` most frequent words, ties in first-seen order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).cloned().collect()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.most_common(self.len()).serialize(serializer)
    }
}
