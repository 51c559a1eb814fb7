//! Word-scan command
//!
//! Scans a words directory and writes the per-file CSV report.

use crate::scan::{ScanConfig, build_rows, scan_directory, write_report};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Result of a scan run
pub struct ScanSummary {
    pub files: usize,
    /// Sum of per-file counts, not globally unique words
    pub total_words: usize,
    pub output: PathBuf,
    pub fallback_files: Vec<PathBuf>,
    pub unreadable_files: Vec<PathBuf>,
}

/// Scan `input` and write the report to `output`
///
/// # Errors
///
/// Returns an error if `input` is not a readable directory or the report
/// cannot be written.
pub fn run_scan(input: &Path, output: &Path) -> Result<ScanSummary> {
    let result = scan_directory(input, &ScanConfig::for_report(output))
        .with_context(|| format!("Cannot scan {}", input.display()))?;

    let rows = build_rows(&result);
    write_report(&rows, output)?;

    Ok(ScanSummary {
        files: result.file_count(),
        total_words: result.total_tokens(),
        output: output.to_path_buf(),
        fallback_files: result.fallback_files().map(Path::to_path_buf).collect(),
        unreadable_files: result.skipped,
    })
}
