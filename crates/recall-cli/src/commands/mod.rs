use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::path::{Path, PathBuf};

use recall_config::{ConfigLoader, RecallConfig};
use recall_store::{SearchOptions, TranscriptStore};

mod list;
mod read;
mod search;

pub use list::render_list;
pub use read::{ReadOptions, ReadSource, read_transcripts};
pub use search::render_search;

/// Retrieve conversation transcripts recorded before context compaction
#[derive(Parser, Debug)]
#[command(name = "get-transcript", version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["list", "all", "file", "search"])))]
#[command(group(
    ArgGroup::new("structured")
        .args(["list", "search", "messages"])
        .multiple(true)
))]
pub struct Cli {
    /// Path to recall.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Transcript directory (overrides config)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// List all transcripts
    #[arg(short, long)]
    list: bool,

    /// Combine all transcripts
    #[arg(short, long)]
    all: bool,

    /// Specific transcript file
    #[arg(short, long, value_name = "NAME")]
    file: Option<String>,

    /// Search query (case-insensitive unless configured otherwise)
    #[arg(short, long, value_name = "QUERY", value_parser = NonEmptyStringValueParser::new())]
    search: Option<String>,

    /// Last N lines only (0 = everything)
    #[arg(short, long, value_name = "N", conflicts_with_all = ["list", "search", "all"])]
    tail: Option<usize>,

    /// Extract human/assistant messages only
    #[arg(short, long, conflicts_with_all = ["list", "search"])]
    messages: bool,

    /// Truncate messages to N characters
    #[arg(long, value_name = "N", requires = "messages")]
    truncate: Option<usize>,

    /// Output file path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output as JSON (list, search and messages)
    #[arg(long, requires = "structured")]
    json: bool,

    /// Print the effective configuration and exit
    #[arg(long, conflicts_with = "mode")]
    show_config: bool,

    /// Generate shell completions for bash, zsh, or fish
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "mode")]
    completions: Option<Shell>,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Search(String),
    Read(ReadSource),
}

impl Cli {
    /// The operation selected by the mode flags. No flag reads the current transcript.
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if let Some(ref query) = self.search {
            Mode::Search(query.clone())
        } else if self.all {
            Mode::Read(ReadSource::All)
        } else if let Some(ref name) = self.file {
            Mode::Read(ReadSource::File(name.clone()))
        } else {
            Mode::Read(ReadSource::Current)
        }
    }

    pub fn run(self) -> recall_core::Result<()> {
        if let Some(shell) = self.completions {
            return Self::cmd_completions(shell);
        }

        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let mut config = config_loader.get();
        if let Some(ref dir) = self.dir {
            config.transcripts.dir = dir.clone();
        }

        self.init_logging(&config);
        for w in config_loader.warnings() {
            tracing::warn!("{}", w);
        }

        if self.show_config {
            return Self::cmd_show_config(&config);
        }

        let store = TranscriptStore::new(&config.transcripts.dir)
            .with_extension(config.transcripts.extension.as_str())
            .with_exclude(config.transcripts.exclude.clone());

        let result = match self.mode() {
            Mode::List => render_list(&store.list()?, self.json)?,
            Mode::Search(query) => {
                let options = SearchOptions {
                    max_matches_per_file: config.search.max_matches_per_file,
                    snippet_chars: config.search.snippet_chars,
                    case_sensitive: config.search.case_sensitive,
                };
                let results = store.search(&query, &options)?;
                render_search(&query, &results, config.search.preview_chars, self.json)?
            }
            Mode::Read(source) => {
                let options = ReadOptions {
                    tail: self.tail,
                    messages: self.messages,
                    truncate: self.truncate.or(config.output.truncate),
                    json: self.json,
                    banner_width: config.output.banner_width,
                };
                read_transcripts(&store, &source, &options)?
            }
        };

        self.emit(&result)
    }

    /// Resolve log level: --verbose > --quiet > --log-level > config, then
    /// initialize tracing on stderr so stdout carries only transcript output.
    fn init_logging(&self, config: &RecallConfig) {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(config.logging.level.as_str())
        };

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

        // try_init: a subscriber may already be installed when embedded
        let _ = match config.logging.format.as_str() {
            "json" => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .json()
                .with_target(true)
                .try_init(),
            "compact" => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .compact()
                .with_target(false)
                .try_init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
        };
    }

    /// Write the result to `--output` or stdout. Empty results print nothing.
    fn emit(&self, result: &str) -> recall_core::Result<()> {
        match self.output {
            Some(ref path) => {
                write_output(path, result)?;
                println!("Saved: {}", path.display());
            }
            None if !result.is_empty() => println!("{result}"),
            None => {}
        }
        Ok(())
    }

    fn cmd_show_config(config: &RecallConfig) -> recall_core::Result<()> {
        let rendered = toml::to_string_pretty(config)
            .map_err(|e| recall_core::RecallError::Config(e.to_string()))?;
        println!("{rendered}");
        Ok(())
    }

    fn cmd_completions(shell: Shell) -> recall_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "get-transcript", &mut std::io::stdout());
        Ok(())
    }
}

/// Write `result` to `path` verbatim. The file is created even when `result` is empty.
pub fn write_output(path: &Path, result: &str) -> recall_core::Result<()> {
    std::fs::write(path, result)?;
    tracing::info!(path = %path.display(), bytes = result.len(), "wrote output");
    Ok(())
}
