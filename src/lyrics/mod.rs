/*!
 * Lyric document preparation.
 *
 * - `cleaner`: strips metadata lines and time markers from raw documents
 * - `tokenizer`: splits cleaned text into lowercase word tokens
 * - `stopwords`: the immutable stopword set and filter
 * - `themes`: the immutable theme dictionary
 */

pub mod cleaner;
pub mod stopwords;
pub mod themes;
pub mod tokenizer;

// Re-export main types
pub use cleaner::{CleanedDocument, LyricCleaner};
pub use stopwords::StopwordSet;
pub use themes::ThemeDictionary;
pub use tokenizer::tokenize;
