//! Cross-file duplicate check for a new lesson file
//!
//! Compares the words of one file with the words of every other JSON file in
//! the words tree. A new lesson should only introduce unseen words.

use crate::core::extract;
use crate::scan::{ScanConfig, scan_directory};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Result of a duplicate check
pub struct DedupeReport {
    pub file: String,
    pub new_words: usize,
    pub other_files: usize,
    pub other_words: usize,
    /// Words of the file already used elsewhere, sorted
    pub duplicates: Vec<String>,
}

impl DedupeReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Check `file` against every other JSON file under `words_dir`
///
/// # Errors
///
/// Returns an error if `file` cannot be read or parsed, or `words_dir`
/// cannot be scanned.
pub fn find_cross_file_duplicates(file: &Path, words_dir: &Path) -> Result<DedupeReport> {
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let doc: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;
    let new_tokens = extract(&doc);

    let config = ScanConfig {
        text_fallback: false,
        skip_names: Vec::new(),
        skip_paths: vec![file.to_path_buf()],
    };
    let others = scan_directory(words_dir, &config)
        .with_context(|| format!("Cannot scan {}", words_dir.display()))?;
    let other_tokens: FxHashSet<_> = others.all_tokens();

    let mut duplicates: Vec<String> = new_tokens
        .iter()
        .filter(|t| other_tokens.contains(*t))
        .map(ToString::to_string)
        .collect();
    duplicates.sort_unstable();

    Ok(DedupeReport {
        file: file.display().to_string(),
        new_words: new_tokens.len(),
        other_files: others.file_count(),
        other_words: other_tokens.len(),
        duplicates,
    })
}
