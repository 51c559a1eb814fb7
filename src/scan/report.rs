//! CSV report of a directory scan
//!
//! Layout: header `file,count,words`, one row per file sorted by lower-cased
//! file name, then two `__summary__` rows (file count, per-file token sum).

use super::ExtractionResult;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// First column of the trailing summary rows
pub const SUMMARY_KEY: &str = "__summary__";

/// One data row of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub file: String,
    pub count: usize,
    pub words: Vec<String>,
}

impl ReportRow {
    #[must_use]
    pub fn joined_words(&self) -> String {
        self.words.join(" ")
    }
}

/// Turn a scan into ordered report rows
#[must_use]
pub fn build_rows(result: &ExtractionResult) -> Vec<ReportRow> {
    let mut paths: Vec<&PathBuf> = result.files.keys().collect();
    paths.sort_by_cached_key(|p| {
        let name = p
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let relative = p.strip_prefix(&result.root).unwrap_or(p.as_path()).to_path_buf();
        (name, relative)
    });

    paths
        .into_iter()
        .map(|path| {
            let mut words: Vec<String> = result.files[path]
                .tokens
                .iter()
                .map(ToString::to_string)
                .collect();
            words.sort_unstable();
            ReportRow {
                file: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                count: words.len(),
                words,
            }
        })
        .collect()
}

/// Write the report to any writer
///
/// # Errors
///
/// Returns an error if a row cannot be written.
pub fn write_report_to<W: io::Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["file", "count", "words"])?;

    let mut total_words = 0;
    for row in rows {
        total_words += row.count;
        let count = row.count.to_string();
        let words = row.joined_words();
        out.write_record([row.file.as_str(), count.as_str(), words.as_str()])?;
    }

    let files = rows.len().to_string();
    let total = total_words.to_string();
    out.write_record([SUMMARY_KEY, "files", files.as_str()])?;
    out.write_record([SUMMARY_KEY, "total_words", total.as_str()])?;
    out.flush()?;
    Ok(())
}

/// Write the report file, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn write_report(rows: &[ReportRow], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    write_report_to(rows, file).with_context(|| format!("Failed to write {}", output.display()))
}
