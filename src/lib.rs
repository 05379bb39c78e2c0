/*!
 * # lyricstats - Lyric corpus statistics
 *
 * A Rust library for textual analytics over a corpus of timed lyric documents.
 *
 * ## Features
 *
 * - Clean raw `.lrc` documents (metadata header lines, `[MM:SS.ff]` time markers)
 * - Tokenize and filter stopwords
 * - Per-song statistics:
 *   - Most frequent words
 *   - Lexical richness (type-token ratio)
 *   - Repeated words above a threshold
 *   - Theme detection from keyword dictionaries
 *   - Longest word used exactly once
 * - Corpus statistics with reproducible attribution of extremes
 * - Global word frequency and cross-song presence counts
 * - Console report, CSV exports and JSON data for charts and word clouds
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `lyrics`: Document preparation:
 *   - `lyrics::cleaner`: Metadata and time marker removal
 *   - `lyrics::tokenizer`: Word tokenization
 *   - `lyrics::stopwords`: Stopword set and filter
 *   - `lyrics::themes`: Theme dictionary
 * - `analysis`: Statistics:
 *   - `analysis::frequency`: Ordered frequency tables
 *   - `analysis::document`: Per-document statistics
 *   - `analysis::corpus`: Corpus aggregation
 * - `report`: Console report and exports
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod lyrics;
pub mod report;

// Re-export main types for easier usage
pub use analysis::{CorpusStats, DocumentAnalyzer, PerDocumentStats};
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use errors::{AppError, CorpusError, ExportError};
pub use lyrics::{LyricCleaner, StopwordSet, ThemeDictionary};
