/*!
 * Error types for the lyricstats application.
 *
 * This module contains custom error types for the corpus pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, cleaning or analyzing the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A file could not be read or written
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file was readable but is not valid UTF-8 text
    #[error("File is not valid UTF-8 text: {path:?} (invalid byte at offset {offset})")]
    Decode {
        /// File that failed to decode
        path: PathBuf,
        /// Offset of the first invalid byte
        offset: usize,
    },

    /// Missing or invalid configuration (stopword list, themes, options)
    #[error("Configuration error: {0}")]
    Config(String),

    /// No input documents matched
    #[error("No documents with extension '{extension}' found in {dir:?}")]
    EmptyCorpus {
        /// Corpus directory that was scanned
        dir: PathBuf,
        /// Extension that was searched for
        extension: String,
    },
}

impl CorpusError {
    /// Build an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while writing reports and exports
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error writing a CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error serializing a JSON export
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the underlying writer
    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),

    /// Output directory could not be created
    #[error("Output directory error: {0}")]
    OutputDir(#[from] CorpusError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the corpus pipeline
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Error from an export
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
