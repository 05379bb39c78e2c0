//! Theme dictionary: theme name to keyword set.

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::CorpusError;

/// Immutable mapping from theme name to its keywords
#[derive(Debug, Clone, Default)]
pub struct ThemeDictionary {
    themes: BTreeMap<String, BTreeSet<String>>,
}

impl ThemeDictionary {
    /// Build the dictionary, lowercasing keywords and dropping blank ones
    pub fn new<K, V, S>(themes: impl IntoIterator<Item = (K, V)>) -> Result<Self, CorpusError>
    where
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();

        for (name, keywords) in themes {
            let name = name.into();
            let keywords: BTreeSet<String> = keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();

            if keywords.is_empty() {
                return Err(CorpusError::Config(format!("Theme '{}' has no keywords", name)));
            }
            map.insert(name, keywords);
        }

        Ok(Self { themes: map })
    }

    /// Iterate themes in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.themes.iter().map(|(name, keywords)| (name.as_str(), keywords))
    }

    /// Keywords of a theme
    pub fn keywords(&self, theme: &str) -> Option<&BTreeSet<String>> {
        self.themes.get(theme)
    }

    /// Number of themes
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether there are no themes
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
