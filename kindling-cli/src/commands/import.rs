//! Import command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::{resolve_patterns, ClippingReader, ReadError};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fail instead of skipping clippings that do not decode
    #[arg(short, long)]
    pub strict: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One text block per clipping
    Text,
    /// JSON array of decoded clippings
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting clipping import");
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut imported = 0usize;
        let mut skipped = 0usize;

        for path in &files {
            let file = File::open(path)
                .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
            log::info!("Reading {}", path.display());

            for item in ClippingReader::new(BufReader::new(file)) {
                match item {
                    Ok(clipping) => {
                        formatter.write_clipping(&clipping)?;
                        imported += 1;
                    }
                    Err(ReadError::Record { title, source }) => {
                        log::warn!("skipping clipping from {title:?}: {source}");
                        skipped += 1;
                    }
                    Err(ReadError::Io(err)) => {
                        return Err(err).with_context(|| {
                            format!("Failed while reading: {}", path.display())
                        });
                    }
                }
            }
        }

        formatter.finish()?;
        log::info!("Imported {imported} clippings, skipped {skipped}");

        if self.strict && skipped > 0 {
            return Err(CliError::ImportFailed(format!(
                "{skipped} clippings could not be decoded"
            ))
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
