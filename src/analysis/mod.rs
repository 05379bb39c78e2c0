/*!
 * Statistics over cleaned lyric documents.
 *
 * - `frequency`: ordered frequency table with deterministic ranking
 * - `document`: per-document statistics
 * - `corpus`: corpus-wide aggregation
 */

pub mod corpus;
pub mod document;
pub mod frequency;

// Re-export main types
pub use corpus::{aggregate, CorpusStats, Extreme};
pub use document::{DocumentAnalyzer, PerDocumentStats};
pub use frequency::FrequencyTable;
