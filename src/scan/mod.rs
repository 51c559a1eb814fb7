//! Directory scanning for vocabulary files
//!
//! Walks a directory tree, extracts tokens from every `.json` file and keeps
//! the per-file result. Unreadable files are skipped with a warning; files
//! that are not valid JSON fall back to plain-text extraction.

mod report;

pub use report::{ReportRow, SUMMARY_KEY, build_rows, write_report, write_report_to};

use crate::core::{TokenSet, VocabularyToken, extract, extract_from_text};
use rustc_hash::FxHashSet;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Directory scan errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// How a file's tokens were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Json,
    TextFallback,
}

/// Tokens extracted from one file
#[derive(Debug, Clone)]
pub struct FileTokens {
    pub source: ExtractionSource,
    pub tokens: TokenSet,
}

/// Per-file extraction results for one scan
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub root: PathBuf,
    pub files: BTreeMap<PathBuf, FileTokens>,
    /// Files that could not be read
    pub skipped: Vec<PathBuf>,
}

impl ExtractionResult {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Sum of per-file token counts; a word in two files counts twice
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.files.values().map(|f| f.tokens.len()).sum()
    }

    /// Distinct tokens across every file
    #[must_use]
    pub fn all_tokens(&self) -> FxHashSet<VocabularyToken> {
        self.files
            .values()
            .flat_map(|f| f.tokens.iter().cloned())
            .collect()
    }

    /// Files whose tokens came from the text fallback
    pub fn fallback_files(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|(_, f)| f.source == ExtractionSource::TextFallback)
            .map(|(p, _)| p.as_path())
    }
}

/// Options for a directory scan
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Fall back to text extraction for files that are not valid JSON
    pub text_fallback: bool,
    /// File names (not paths) never scanned
    pub skip_names: Vec<String>,
    /// Paths never scanned, e.g. the report being written
    pub skip_paths: Vec<PathBuf>,
}

impl ScanConfig {
    /// Settings for the CSV report: text fallback on, report file excluded
    #[must_use]
    pub fn for_report(output: &Path) -> Self {
        Self {
            text_fallback: true,
            skip_names: Vec::new(),
            skip_paths: vec![output.to_path_buf()],
        }
    }
}

/// Extract tokens from a single file's text
///
/// Returns `None` when the text is not JSON and fallback is disabled.
#[must_use]
pub fn extract_file_text(text: &str, text_fallback: bool) -> Option<FileTokens> {
    match serde_json::from_str::<Value>(text) {
        Ok(doc) => Some(FileTokens {
            source: ExtractionSource::Json,
            tokens: extract(&doc),
        }),
        Err(e) if text_fallback => {
            tracing::debug!("JSON parse failed ({e}), using text fallback");
            Some(FileTokens {
                source: ExtractionSource::TextFallback,
                tokens: extract_from_text(text),
            })
        }
        Err(e) => {
            tracing::warn!("Skipping invalid JSON: {e}");
            None
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// List every `.json` file under `root` that the config does not exclude
///
/// # Errors
///
/// Returns `ScanError` if `root` is missing or not a directory.
pub fn find_json_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Error accessing entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_json(entry.path()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if config.skip_names.iter().any(|s| *s == name) {
            tracing::debug!("Skipping excluded file {}", entry.path().display());
            continue;
        }
        if config.skip_paths.iter().any(|p| same_file(p, entry.path())) {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

/// Scan a directory tree and extract tokens per file
///
/// Files yielding no tokens are left out of the result.
///
/// # Errors
///
/// Returns `ScanError` if `root` is missing or not a directory. Individual
/// unreadable files are recorded in `skipped` instead.
pub fn scan_directory(root: &Path, config: &ScanConfig) -> Result<ExtractionResult, ScanError> {
    let files = find_json_files(root, config)?;
    Ok(scan_files(root, files, config))
}

/// Extract tokens from an already collected list of files
fn scan_files(root: &Path, files: Vec<PathBuf>, config: &ScanConfig) -> ExtractionResult {
    let mut result = ExtractionResult {
        root: root.to_path_buf(),
        ..ExtractionResult::default()
    };

    for path in files {
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Cannot read {}: {}", path.display(), e);
                result.skipped.push(path);
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        if text.trim().is_empty() {
            continue;
        }

        let Some(file_tokens) = extract_file_text(&text, config.text_fallback) else {
            tracing::debug!("No tokens taken from {}", path.display());
            continue;
        };
        if file_tokens.source == ExtractionSource::TextFallback {
            tracing::info!("{} is not valid JSON, used text fallback", path.display());
        }
        if !file_tokens.tokens.is_empty() {
            result.files.insert(path, file_tokens);
        }
    }

    result
}
