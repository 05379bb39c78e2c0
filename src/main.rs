// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use lyricstats::app_config::{self, Config};
use lyricstats::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clean, analyze and export statistics for a lyric corpus (default command)
    Analyze(AnalyzeArgs),

    /// Only clean the corpus documents
    Clean(CleanArgs),

    /// Generate shell completions for lyricstats
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every corpus command
#[derive(clap::Args, Debug, Clone)]
struct CommonArgs {
    /// Directory containing the lyric documents
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Output directory for cleaned documents and exports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Rewrite the source documents instead of writing cleaned copies
    #[arg(long)]
    in_place: bool,

    /// Document extension (default: lrc)
    #[arg(short, long)]
    extension: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Stopword list, one word per line
    #[arg(short, long)]
    stopwords: Option<PathBuf>,

    /// Number of top words listed per song
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Words counted more than this many times are exported as repeated
    #[arg(short, long)]
    threshold: Option<usize>,

    /// Number of words handed to charts and word clouds
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Abort on the first unreadable document instead of skipping it
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Parser, Debug)]
struct CleanArgs {
    #[command(flatten)]
    common: CommonArgs,
}

/// lyricstats - Lyric corpus statistics
///
/// Cleans timed lyric documents and computes word frequencies, lexical richness,
/// repeated words, themes and corpus-wide aggregates.
#[derive(Parser, Debug)]
#[command(name = "lyricstats")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Word statistics for a corpus of lyric files")]
#[command(long_about = "lyricstats cleans .lrc lyric files and computes word statistics over the corpus.

EXAMPLES:
    lyricstats lyrics/                              # Analyze using conf.json
    lyricstats lyrics/ -s stop-words/italian.txt    # Use a specific stopword list
    lyricstats lyrics/ -n 10 -t 5 -o report/        # Top 10 words, repeated above 5
    lyricstats clean lyrics/ --in-place             # Only strip metadata and time markers
    lyricstats completions bash > lyricstats.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. Themes can only be changed in the config file.

OUTPUTS:
    repeated_words.csv     - song,word,count
    themes.csv             - song_name,theme,matched_keyword_count
    summary.json           - every statistic of the run
    viz.word_frequency.json, viz.word_presence.json - data for charts and word clouds")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: AnalyzeArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Logger accepts everything; the effective level is set via max_level below
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lyricstats", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Clean(args)) => run_clean(args),
        Some(Commands::Analyze(args)) => run_analyze(args),
        // Default behavior: top-level args are the analyze args
        None => run_analyze(cli.analyze),
    }
}

/// Load the config file, apply common CLI overrides and set the log level
fn load_config(common: &CommonArgs) -> Result<Config> {
    // Apply the CLI log level before anything is logged
    if let Some(level) = &common.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&common.config_path)?;

    if let Some(input_dir) = &common.input_dir {
        config.input_dir = input_dir.clone();
    }
    if let Some(output_dir) = &common.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(extension) = &common.extension {
        config.extension = extension.clone();
    }
    if let Some(level) = &common.log_level {
        config.log_level = level.clone().into();
    }
    if common.in_place {
        config.clean_in_place = true;
    }
    if common.no_progress {
        config.show_progress = false;
    }

    log::set_max_level(config.log_level.to_level_filter());
    Ok(config)
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let mut config = load_config(&args.common)?;

    if let Some(stopwords) = args.stopwords {
        config.stopwords_path = stopwords;
    }
    if let Some(top_n) = args.top_n {
        config.analysis.top_n = top_n;
    }
    if let Some(threshold) = args.threshold {
        config.analysis.repeated_threshold = threshold;
    }
    if let Some(top_k) = args.top_k {
        config.analysis.top_k = top_k;
    }
    if args.fail_fast {
        config.fail_fast = true;
    }

    let controller = Controller::with_config(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    controller.run(&mut out)?;
    Ok(())
}

fn run_clean(args: CleanArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let controller = Controller::with_config(config)?;
    controller.run_clean()?;
    Ok(())
}
