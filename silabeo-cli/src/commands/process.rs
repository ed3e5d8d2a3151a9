//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use silabeo_core::{Config, Syllabifier};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, Document};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Inline text to syllabify
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separator placed between syllables
    #[arg(short, long, value_name = "SEP", env = "SILABEO_SEPARATOR")]
    pub separator: Option<String>,

    /// Keep the original casing of each word
    #[arg(long, overrides_with = "no_preserve_case")]
    pub preserve_case: bool,

    /// Lower-case every word, even when the config file preserves case
    #[arg(long, overrides_with = "preserve_case")]
    pub no_preserve_case: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Syllabified text, one line per input
    Text,
    /// JSON array with per-word syllables
    Json,
    /// Markdown word list with totals
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting syllabification");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let config = self.build_config(&file_config)?;
        let format = match self.format {
            Some(format) => format,
            None => file_config.output.format()?,
        };
        let syllabifier = Syllabifier::with_config(config.clone())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let documents = self.collect_documents()?;
        log::info!("Processing {} input(s) as {:?}", documents.len(), format);

        let mut progress = ProgressReporter::new(self.quiet || documents.len() < 2);
        progress.init_files(documents.len() as u64);

        let (names, inputs): (Vec<_>, Vec<_>) =
            documents.into_iter().map(|d| (d.name, d.input)).unzip();
        let results = syllabifier.process_batch(inputs);

        let mut formatter = self.create_formatter(format, &config, file_config.output.pretty_json)?;
        for (name, result) in names.iter().zip(results) {
            let output = result
                .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;
            log::debug!(
                "{}: {} words, {} syllables",
                name,
                output.metadata.stats.word_count,
                output.metadata.stats.syllable_count
            );
            formatter.format_document(name, &output)?;
            progress.file_completed(name);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Merge flags over the configuration file
    pub fn build_config(&self, file_config: &CliConfig) -> Result<Config> {
        let separator = self
            .separator
            .clone()
            .unwrap_or_else(|| file_config.syllabification.separator.clone());
        let preserve_case = match (self.preserve_case, self.no_preserve_case) {
            (true, _) => true,
            (_, true) => false,
            _ => file_config.syllabification.preserve_case,
        };

        Config::builder()
            .separator(separator)
            .preserve_case(preserve_case)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn collect_documents(&self) -> Result<Vec<Document>> {
        if let Some(text) = &self.text {
            return Ok(vec![Document::inline(text)]);
        }

        if self.input.is_empty() {
            log::debug!("No input given, reading stdin");
            return Ok(vec![Document::stdin()]);
        }

        let files = resolve_patterns(&self.input)?;
        Ok(files.into_iter().map(Document::file).collect())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        config: &Config,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => {
                Box::new(MarkdownFormatter::new(writer, config.separator()))
            }
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
