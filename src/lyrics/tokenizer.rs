//! Word tokenization of cleaned lyric text.

use once_cell::sync::Lazy;
use regex::Regex;

// Unicode-aware: letters, digits and underscore
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Split text into lowercase word tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
