use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analysis::{aggregate, corpus::canonical_order, CorpusStats, DocumentAnalyzer, PerDocumentStats};
use crate::app_config::Config;
use crate::errors::CorpusError;
use crate::file_utils::FileManager;
use crate::lyrics::{CleanedDocument, LyricCleaner, StopwordSet, ThemeDictionary};
use crate::report::{hand_off_frequencies, ConsoleReport, JsonFrequencyExporter, ReportExporter};

// @module: Application controller for corpus analysis

/// Name of the directory, under the output directory, receiving cleaned documents
pub const CLEANED_DIR: &str = "cleaned";

/// A document skipped because it could not be read or written
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    /// Path of the document
    pub path: PathBuf,
    /// What went wrong
    pub error: String,
}

/// Result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Per-document statistics in canonical order
    pub documents: Vec<PerDocumentStats>,
    /// Corpus statistics
    pub corpus: CorpusStats,
    /// Documents that were skipped
    pub failures: Vec<DocumentFailure>,
}

/// Result of cleaning the corpus
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    /// Cleaned documents, sorted by name
    pub documents: Vec<CleanedDocument>,
    /// Documents that were skipped
    pub failures: Vec<DocumentFailure>,
}

/// Main application controller for lyric corpus analysis
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Directory receiving cleaned documents when not cleaning in place
    pub fn cleaned_dir(&self) -> PathBuf {
        self.config.output_dir.join(CLEANED_DIR)
    }

    /// Load the stopword list named by the configuration
    pub fn load_stopwords(&self) -> Result<StopwordSet> {
        let stopwords = StopwordSet::load(&self.config.stopwords_path)?;
        info!("Loaded {} stopwords", stopwords.len());
        Ok(stopwords)
    }

    /// Build the theme dictionary from the configuration
    pub fn build_themes(&self) -> Result<ThemeDictionary> {
        Ok(ThemeDictionary::new(self.config.themes.clone())?)
    }

    /// List the corpus documents, sorted by path
    pub fn discover_documents(&self) -> Result<Vec<PathBuf>> {
        let input_dir = &self.config.input_dir;
        if !FileManager::dir_exists(input_dir) {
            return Err(CorpusError::Config(format!(
                "Input directory does not exist: {:?}",
                input_dir
            ))
            .into());
        }

        let extension = self.config.normalized_extension();
        let cleaned_dir = self.cleaned_dir();
        let files: Vec<PathBuf> = FileManager::find_files(input_dir, extension)?
            .into_iter()
            .filter(|path| !FileManager::is_within(path, &cleaned_dir))
            .collect();

        if files.is_empty() {
            warn!(
                "{}",
                CorpusError::EmptyCorpus {
                    dir: input_dir.clone(),
                    extension: extension.to_string(),
                }
            );
        } else {
            info!("Found {} document(s) in {:?}", files.len(), input_dir);
        }

        Ok(files)
    }

    fn destination_for(&self, source: &Path) -> PathBuf {
        if self.config.clean_in_place {
            source.to_path_buf()
        } else {
            FileManager::generate_output_path(source, &self.config.input_dir, self.cleaned_dir())
        }
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} songs {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("=>-"));
        progress_bar
    }

    /// Clean every corpus document.
    ///
    /// Unreadable documents are recorded and skipped, unless `fail_fast` is set,
    /// in which case the first failure aborts the run.
    pub fn clean_corpus(&self) -> Result<CleaningOutcome> {
        let files = self.discover_documents()?;
        let cleaner = LyricCleaner::new(&self.config.metadata_tags);
        let progress_bar = self.progress_bar(files.len());

        let mut documents = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for path in &files {
            progress_bar.set_message(FileManager::document_name(path));
            let destination = self.destination_for(path);

            match cleaner.clean_file(path, &destination) {
                Ok(document) => {
                    debug!("Cleaned {:?} -> {:?}", path, document.path);
                    documents.push(document);
                }
                Err(e) if self.config.fail_fast => {
                    progress_bar.abandon();
                    return Err(e).with_context(|| format!("Failed to clean {:?}", path));
                }
                Err(e) => {
                    error!("Skipping {:?}: {}", path, e);
                    failures.push(DocumentFailure {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(CleaningOutcome { documents, failures })
    }

    /// Clean and analyze the corpus
    pub fn analyze(&self) -> Result<RunSummary> {
        let stopwords = self.load_stopwords()?;
        let themes = self.build_themes()?;
        let outcome = self.clean_corpus()?;

        let analyzer = DocumentAnalyzer::new(&stopwords, &themes, self.config.analysis.clone());
        let analyzed: Vec<PerDocumentStats> = outcome
            .documents
            .iter()
            .map(|doc| analyzer.analyze(&doc.name, &doc.text))
            .collect();

        let corpus = aggregate(&analyzed);
        info!(
            "{} significant word occurrence(s), {} distinct word(s) after stopword removal",
            corpus.global_frequency.total(),
            corpus.global_frequency.len()
        );
        let documents = canonical_order(&analyzed).into_iter().cloned().collect();

        Ok(RunSummary {
            documents,
            corpus,
            failures: outcome.failures,
        })
    }

    /// Write the console report, the exports and the visualization data
    pub fn publish<W: Write>(&self, summary: &RunSummary, out: &mut W) -> Result<Vec<PathBuf>> {
        ConsoleReport::new(summary, self.config.analysis.top_k)
            .render(out)
            .context("Failed to write console report")?;

        let mut written = ReportExporter::new(&self.config.output_dir)
            .export_all(summary)
            .context("Failed to write exports")?;

        let mut viz = JsonFrequencyExporter::new(&self.config.output_dir);
        hand_off_frequencies(&mut viz, &summary.corpus, self.config.analysis.top_k)
            .context("Failed to write visualization data")?;
        written.extend_from_slice(viz.written());

        for path in &written {
            debug!("Wrote {:?}", path);
        }
        Ok(written)
    }

    /// Run the full pipeline, reporting to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let start_time = std::time::Instant::now();

        let summary = self.analyze()?;
        let written = self.publish(&summary, out)?;

        if !summary.failures.is_empty() {
            warn!(
                "{} document(s) skipped, {} analyzed",
                summary.failures.len(),
                summary.documents.len()
            );
        }
        info!(
            "Analysis of {} song(s) completed in {:.2?}, {} file(s) written to {:?}",
            summary.documents.len(),
            start_time.elapsed(),
            written.len(),
            self.config.output_dir
        );

        Ok(summary)
    }

    /// Only clean the corpus, without analysis
    pub fn run_clean(&self) -> Result<CleaningOutcome> {
        let outcome = self.clean_corpus()?;

        let target = if self.config.clean_in_place {
            "in place".to_string()
        } else {
            format!("into {:?}", self.cleaned_dir())
        };
        info!("Cleaned {} document(s) {}", outcome.documents.len(), target);

        if !outcome.failures.is_empty() {
            return Err(anyhow!(
                "{} document(s) could not be cleaned",
                outcome.failures.len()
            ));
        }
        Ok(outcome)
    }
}
