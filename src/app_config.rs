use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the lyric documents
    #[serde(default)]
    pub input_dir: PathBuf,

    /// Directory receiving cleaned documents and exports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Newline-delimited stopword list
    #[serde(default = "default_stopwords_path")]
    pub stopwords_path: PathBuf,

    /// Extension of the lyric documents, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Metadata tags whose lines are dropped during cleaning
    #[serde(default = "default_metadata_tags")]
    pub metadata_tags: Vec<String>,

    /// Theme name to keyword list
    #[serde(default = "default_themes")]
    pub themes: BTreeMap<String, Vec<String>>,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Rewrite the source documents instead of writing cleaned copies
    #[serde(default)]
    pub clean_in_place: bool,

    /// Abort the whole run on the first unreadable document
    #[serde(default)]
    pub fail_fast: bool,

    /// Show a progress bar over the document loop
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the per-document and corpus statistics
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Number of most frequent words kept per document
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Words counted strictly more often than this are "repeated"
    #[serde(default = "default_repeated_threshold")]
    pub repeated_threshold: usize,

    /// Length of the frequency sequences handed to visualization
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            repeated_threshold: default_repeated_threshold(),
            top_k: default_top_k(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_stopwords_path() -> PathBuf {
    PathBuf::from("stop-words/italian.txt")
}

fn default_extension() -> String {
    "lrc".to_string()
}

fn default_metadata_tags() -> Vec<String> {
    ["id", "ar", "al", "ti", "length"]
        .iter()
        .map(|tag| tag.to_string())
        .collect()
}

fn default_themes() -> BTreeMap<String, Vec<String>> {
    let themes: [(&str, &[&str]); 4] = [
        ("politica", &["governo", "legge", "parlamento", "stato", "politico"]),
        ("religione", &["dio", "chiesa", "preghiera", "gesù"]),
        ("tecnologia", &["computer", "internet", "telefono", "software"]),
        ("amore", &["amore", "cuore", "passione", "bacio"]),
    ];

    themes
        .iter()
        .map(|(name, keywords)| {
            (
                name.to_string(),
                keywords.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect()
}

fn default_top_n() -> usize {
    5
}

fn default_repeated_threshold() -> usize {
    10
}

fn default_top_k() -> usize {
    20
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load the configuration from a JSON file, writing a default one if it doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim().is_empty() {
            return Err(anyhow!("Document extension must not be empty"));
        }

        if self.analysis.top_n == 0 {
            return Err(anyhow!("top_n must be at least 1"));
        }

        if self.analysis.top_k == 0 {
            return Err(anyhow!("top_k must be at least 1"));
        }

        if let Some(tag) = self.metadata_tags.iter().find(|t| t.trim().is_empty()) {
            return Err(anyhow!("Invalid empty metadata tag: {:?}", tag));
        }

        for (theme, keywords) in &self.themes {
            if keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(anyhow!("Theme '{}' has no keywords", theme));
            }
        }

        Ok(())
    }

    /// Extension with any leading dot removed
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim().trim_start_matches('.')
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: PathBuf::from("lyrics"),
            output_dir: default_output_dir(),
            stopwords_path: default_stopwords_path(),
            extension: default_extension(),
            metadata_tags: default_metadata_tags(),
            themes: default_themes(),
            analysis: AnalysisConfig::default(),
            clean_in_place: false,
            fail_fast: false,
            show_progress: true,
            log_level: LogLevel::default(),
        }
    }
}
