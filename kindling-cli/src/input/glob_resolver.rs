//! Glob expansion for input file arguments

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Expand input patterns into a sorted, deduplicated list of clipping files.
///
/// A literal path is a pattern matching itself, so `-i "My Clippings.txt"`
/// and `-i "backups/*.txt"` go through the same path. Directories that
/// happen to match are skipped. Matching nothing at all is an error; a typo
/// must not become a silent empty import.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let matches =
            glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        for entry in matches {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    // Overlapping patterns may surface the same file twice.
    files.sort();
    files.dedup();

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(files)
}
