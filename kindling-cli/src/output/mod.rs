//! Output formatting module

use crate::input::ImportCandidate;
use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single clipping
    fn write_clipping(&mut self, clipping: &ImportCandidate) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
