//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::BufReader;

use crate::error::CliError;
use crate::input::{resolve_patterns, ClippingReader, ReadError};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let files = resolve_patterns(&self.input)?;

        let mut total_skipped = 0usize;

        for path in &files {
            let file = File::open(path)
                .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;

            let mut decoded = 0usize;
            let mut skipped = 0usize;

            for item in ClippingReader::new(BufReader::new(file)) {
                match item {
                    Ok(_) => decoded += 1,
                    Err(ReadError::Record { .. }) => skipped += 1,
                    Err(ReadError::Io(err)) => {
                        return Err(err).with_context(|| {
                            format!("Failed while reading: {}", path.display())
                        });
                    }
                }
            }

            if skipped == 0 {
                println!("\u{2713} {}: {} clippings", path.display(), decoded);
            } else {
                println!(
                    "\u{2717} {}: {} clippings, {} undecodable",
                    path.display(),
                    decoded,
                    skipped
                );
            }
            total_skipped += skipped;
        }

        if total_skipped > 0 {
            return Err(CliError::ImportFailed(format!(
                "{total_skipped} clippings could not be decoded"
            ))
            .into());
        }

        Ok(())
    }
}
