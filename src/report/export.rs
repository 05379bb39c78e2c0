/*!
 * Flat-file exports.
 *
 * - `repeated_words.csv`: `song,word,count`, one row per repeated word per song
 * - `themes.csv`: `song_name,theme,matched_keyword_count`, songs without themes omitted
 * - `summary.json`: every statistic of the run
 * - `viz.*.json`: ordered `(word, count)` sequences for chart and word-cloud rendering
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::analysis::{CorpusStats, PerDocumentStats};
use crate::app_controller::RunSummary;
use crate::errors::ExportError;
use crate::file_utils::FileManager;

/// Repeated words export file name
pub const REPEATED_WORDS_FILE: &str = "repeated_words.csv";
/// Themes export file name
pub const THEMES_FILE: &str = "themes.csv";
/// JSON summary file name
pub const SUMMARY_FILE: &str = "summary.json";

/// One row of the repeated words export
#[derive(Debug, Serialize)]
struct RepeatedWordRecord<'a> {
    song: &'a str,
    word: &'a str,
    count: usize,
}

/// One row of the themes export
#[derive(Debug, Serialize)]
struct ThemeRecord<'a> {
    song_name: &'a str,
    theme: &'a str,
    matched_keyword_count: usize,
}

fn csv_writer<W: Write>(out: W, header: &[&str]) -> Result<csv::Writer<W>, ExportError> {
    // Header is written by hand so it appears even without rows
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(header)?;
    Ok(wtr)
}

/// Write the repeated words CSV
pub fn write_repeated_words_csv<W: Write>(out: W, documents: &[PerDocumentStats]) -> Result<(), ExportError> {
    let mut wtr = csv_writer(out, &["song", "word", "count"])?;

    for doc in documents {
        for (word, count) in &doc.repeated_words {
            wtr.serialize(RepeatedWordRecord {
                song: &doc.name,
                word,
                count: *count,
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write the themes CSV
pub fn write_themes_csv<W: Write>(out: W, documents: &[PerDocumentStats]) -> Result<(), ExportError> {
    let mut wtr = csv_writer(out, &["song_name", "theme", "matched_keyword_count"])?;

    for doc in documents {
        for (theme, count) in &doc.themes {
            wtr.serialize(ThemeRecord {
                song_name: &doc.name,
                theme,
                matched_keyword_count: *count,
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Which frequency notion a sequence carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyKind {
    /// Raw occurrences across the corpus
    WordFrequency,
    /// Number of songs containing the word
    WordPresence,
}

impl FrequencyKind {
    /// Chart title
    pub fn title(&self) -> &'static str {
        match self {
            Self::WordFrequency => "Most used words (stopwords removed)",
            Self::WordPresence => "Words present in the most songs (stopwords removed)",
        }
    }

    /// Identifier used in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordFrequency => "word_frequency",
            Self::WordPresence => "word_presence",
        }
    }
}

/// Receives ordered `(word, count)` sequences for rendering
pub trait FrequencyConsumer {
    /// Consume one non-empty sequence
    fn consume(&mut self, kind: FrequencyKind, frequencies: &[(String, usize)]) -> Result<(), ExportError>;
}

#[derive(Serialize)]
struct VizWord<'a> {
    word: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct VizDocument<'a> {
    kind: FrequencyKind,
    title: &'a str,
    words: Vec<VizWord<'a>>,
}

/// Writes each sequence to `viz.<kind>.json` for an external renderer
#[derive(Debug, Clone)]
pub struct JsonFrequencyExporter {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonFrequencyExporter {
    /// Create an exporter writing into `output_dir`
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Path used for a kind
    pub fn path_for(&self, kind: FrequencyKind) -> PathBuf {
        self.output_dir.join(format!("viz.{}.json", kind.as_str()))
    }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrequencyConsumer for JsonFrequencyExporter {
    fn consume(&mut self, kind: FrequencyKind, frequencies: &[(String, usize)]) -> Result<(), ExportError> {
        FileManager::ensure_dir(&self.output_dir)?;
        let path = self.path_for(kind);

        let document = VizDocument {
            kind,
            title: kind.title(),
            words: frequencies
                .iter()
                .map(|(word, count)| VizWord { word, count: *count })
                .collect(),
        };

        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, &document)?;
        debug!("Wrote {:?}", path);

        self.written.push(path);
        Ok(())
    }
}

/// Hand the top-`k` global frequency and presence sequences to `consumer`.
///
/// Empty sequences are skipped. Returns how many sequences were handed over.
pub fn hand_off_frequencies<C: FrequencyConsumer + ?Sized>(
    consumer: &mut C,
    corpus: &CorpusStats,
    top_k: usize,
) -> Result<usize, ExportError> {
    let sequences = [
        (FrequencyKind::WordFrequency, corpus.top_global(top_k)),
        (FrequencyKind::WordPresence, corpus.top_presence(top_k)),
    ];

    let mut handed = 0;
    for (kind, frequencies) in sequences {
        if frequencies.is_empty() {
            info!("Skipping {} visualization: no significant words", kind.as_str());
            continue;
        }
        consumer.consume(kind, &frequencies)?;
        handed += 1;
    }

    Ok(handed)
}

/// Writes all flat-file exports of a run into one directory
#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
}

impl ReportExporter {
    /// Create an exporter for `output_dir`
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    fn create(&self, file_name: &str) -> Result<(PathBuf, BufWriter<File>), ExportError> {
        FileManager::ensure_dir(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        let file = File::create(&path)?;
        Ok((path, BufWriter::new(file)))
    }

    /// Write the CSV exports and the JSON summary, returning the written paths
    pub fn export_all(&self, summary: &RunSummary) -> Result<Vec<PathBuf>, ExportError> {
        let (repeated_path, out) = self.create(REPEATED_WORDS_FILE)?;
        write_repeated_words_csv(out, &summary.documents)?;

        let (themes_path, out) = self.create(THEMES_FILE)?;
        write_themes_csv(out, &summary.documents)?;

        let (summary_path, mut out) = self.create(SUMMARY_FILE)?;
        serde_json::to_writer_pretty(&mut out, summary)?;
        out.flush()?;

        Ok(vec![repeated_path, themes_path, summary_path])
    }
}
