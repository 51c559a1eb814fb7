//! Free-text word analysis command
//!
//! Counts every word in a text file and lists the distinct words. Words may
//! carry a single hyphen or apostrophe joint.

use crate::core::text_word_counts;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Result of analyzing a text file
pub struct TextAnalysis {
    pub file: String,
    /// Every match, repeats included
    pub total_words: usize,
    pub unique_words: usize,
    /// Distinct lower-cased words, sorted
    pub words: Vec<String>,
}

/// Analyze word usage in raw text
#[must_use]
pub fn analyze_text(file: &str, text: &str) -> TextAnalysis {
    let (total_words, distinct) = text_word_counts(text);
    let mut words: Vec<String> = distinct.into_iter().collect();
    words.sort_unstable();

    TextAnalysis {
        file: file.to_string(),
        total_words,
        unique_words: words.len(),
        words,
    }
}

/// Analyze word usage in a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn analyze_file(path: &Path) -> Result<TextAnalysis> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(analyze_text(&path.display().to_string(), &text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn analyze_counts_repeats_and_unique() {
        let result = analyze_text("doc", "The cat saw the Cat. Don't well-known!");

        assert_eq!(result.file, "doc");
        assert_eq!(result.total_words, 7);
        assert_eq!(result.unique_words, 5);
        assert_eq!(result.words, vec!["cat", "don't", "saw", "the", "well-known"]);
    }

    #[test]
    fn analyze_empty_text() {
        let result = analyze_text("empty", "");
        assert_eq!(result.total_words, 0);
        assert!(result.words.is_empty());
    }

    #[test]
    fn analyze_missing_file() {
        let dir = tempdir().unwrap();
        assert!(analyze_file(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn analyze_file_reads_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("story.txt");
        fs::write(&path, "Sun moon sun").unwrap();

        let result = analyze_file(&path).unwrap();
        assert_eq!(result.total_words, 3);
        assert_eq!(result.words, vec!["moon", "sun"]);
    }

    #[test]
    fn analyze_splits_multi_joint_words() {
        let result = analyze_text("doc", "My mother-in-law");
        assert_eq!(result.total_words, 3);
        assert_eq!(result.words, vec!["law", "mother-in", "my"]);
    }
}
