/*!
 * Cleaning of raw timed-lyric documents.
 *
 * A raw document may carry metadata header lines (`[ar: Artist]`, `[ti: Title]`, ...)
 * and inline time markers (`[01:23]`, `[01:23.45]`). Cleaning removes both and drops
 * the lines left blank, so that only sung text remains. The transform is idempotent.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::errors::CorpusError;
use crate::file_utils::FileManager;

// @const: Time marker regex ([MM:SS] or [MM:SS.ff])
static TIME_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d{2}:\d{2}(?:\.\d{2})?\]").unwrap());

/// A document after cleaning
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedDocument {
    /// Document name (file name without extension)
    pub name: String,
    /// Where the cleaned text was written
    pub path: PathBuf,
    /// Cleaned text
    pub text: String,
}

/// Removes metadata lines and time markers from lyric documents
#[derive(Debug, Clone)]
pub struct LyricCleaner {
    /// Lowercase line prefixes such as `[ar:`
    metadata_prefixes: Vec<String>,
}

impl Default for LyricCleaner {
    fn default() -> Self {
        Self::new(&["id", "ar", "al", "ti", "length"])
    }
}

impl LyricCleaner {
    /// Create a cleaner for the given metadata tags (matched case-insensitively)
    pub fn new<S: AsRef<str>>(metadata_tags: &[S]) -> Self {
        let metadata_prefixes = metadata_tags
            .iter()
            .map(|tag| format!("[{}:", tag.as_ref().trim().to_lowercase()))
            .collect();

        Self { metadata_prefixes }
    }

    /// Remove every time marker from a string
    pub fn strip_time_markers(text: &str) -> String {
        let mut current = text.to_string();
        // Removing one marker can splice a new one together
        while TIME_MARKER_REGEX.is_match(&current) {
            current = TIME_MARKER_REGEX.replace_all(&current, "").into_owned();
        }
        current
    }

    /// Check whether a line is a metadata header line
    pub fn is_metadata_line(&self, line: &str) -> bool {
        let lowered = line.trim_start().to_lowercase();
        self.metadata_prefixes
            .iter()
            .any(|prefix| lowered.starts_with(prefix.as_str()))
    }

    /// Clean a document's text
    pub fn clean_text(&self, text: &str) -> String {
        let mut cleaned = String::with_capacity(text.len());

        for line in text.lines() {
            let line = Self::strip_time_markers(line);
            if line.trim().is_empty() || self.is_metadata_line(&line) {
                continue;
            }
            cleaned.push_str(&line);
            cleaned.push('\n');
        }

        cleaned
    }

    /// Read `source`, clean it and write the result to `destination`.
    ///
    /// `destination` may equal `source` for in-place cleaning. Nothing is written
    /// when the destination already holds the cleaned text.
    pub fn clean_file(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<CleanedDocument, CorpusError> {
        let raw = FileManager::read_text(source)?;
        let text = self.clean_text(&raw);

        let unchanged = if destination == source {
            raw == text
        } else {
            FileManager::read_text(destination).is_ok_and(|existing| existing == text)
        };

        if unchanged {
            debug!("Already clean: {:?}", destination);
        } else {
            FileManager::write_text(destination, &text)?;
        }

        Ok(CleanedDocument {
            name: FileManager::document_name(source),
            path: destination.to_path_buf(),
            text,
        })
    }
}
