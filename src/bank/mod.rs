//! Word bank loading, checking and repair
//!
//! The bank is a single JSON document (`words.json` by default) holding
//! metadata and an ordered map of phonics lessons.

mod check;
mod model;
mod repair;

pub use check::{
    CheckConfig, CheckReport, Duplicate, LessonSummary, Occurrence, TIER_SAMPLE_SIZE,
    TierOverlap, TierShortfall, TierSummary, check_bank, find_duplicates, find_shortfalls,
    find_tier_overlaps, words_by_tier,
};
pub use model::{Lesson, Metadata, WordBank, WordEntry};
pub use repair::{
    RemovedDuplicate, RepairResult, TierChange, bump_version, rebalance_tiers, remove_duplicates,
    repair_bank,
};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word bank I/O errors
#[derive(Debug, Error)]
pub enum BankError {
    /// Bank file does not exist
    #[error("Word bank not found: {0}")]
    NotFound(PathBuf),

    /// Bank file could not be read or written
    #[error("I/O error on {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// Bank file is not valid JSON for the bank schema
    #[error("JSON format error in {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    /// Bank could not be serialized
    #[error("Failed to serialize word bank: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Read and parse a word bank file
///
/// # Errors
///
/// Returns `BankError::NotFound` if the file is missing, `BankError::Io` if it
/// cannot be read, and `BankError::Parse` if it is not a valid bank document.
pub fn load_bank(path: &Path) -> Result<WordBank, BankError> {
    if !path.exists() {
        return Err(BankError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| BankError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&text).map_err(|e| BankError::Parse(path.to_path_buf(), e))
}

/// Write a bank as 2-space indented JSON, keeping non-ASCII text as-is
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_bank(bank: &WordBank, path: &Path) -> Result<(), BankError> {
    let mut text = serde_json::to_string_pretty(bank).map_err(BankError::Serialize)?;
    text.push('\n');
    fs::write(path, text).map_err(|e| BankError::Io(path.to_path_buf(), e))
}

/// Path of the backup written next to a bank: `words.json` → `words_backup.json`
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "words".into(), |s| s.to_string_lossy());
    let name = match path.extension() {
        Some(ext) => format!("{stem}_backup.{}", ext.to_string_lossy()),
        None => format!("{stem}_backup"),
    };
    path.with_file_name(name)
}

/// Copy the bank file to its backup path
///
/// # Errors
///
/// Returns `BankError::Io` if the copy fails.
pub fn create_backup(path: &Path) -> Result<PathBuf, BankError> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| BankError::Io(backup.clone(), e))?;
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn backup_path_keeps_extension() {
        assert_eq!(
            backup_path(Path::new("/data/words.json")),
            PathBuf::from("/data/words_backup.json")
        );
        assert_eq!(
            backup_path(Path::new("bank")),
            PathBuf::from("bank_backup")
        );
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_bank(&dir.path().join("words.json"));
        assert!(matches!(result, Err(BankError::NotFound(_))));
    }

    #[test]
    fn load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_bank(&path), Err(BankError::Parse(..))));
    }

    #[test]
    fn save_then_load_keeps_non_ascii() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(
            &path,
            r#"{"metadata":{"version":"1.0"},"phonicsLessons":{"a":{"phoneme":"/æ/","description":"","words":[{"word":"cat","difficulty":1,"meaning":"猫"}]}}}"#,
        )
        .unwrap();

        let bank = load_bank(&path).unwrap();
        save_bank(&bank, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("猫"));
        assert!(text.contains("\n  \"metadata\""));
        let reloaded = load_bank(&path).unwrap();
        assert_eq!(reloaded.entry_count(), 1);
    }

    #[test]
    fn backup_copies_original_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "{\"metadata\":{}}").unwrap();
        let backup = create_backup(&path).unwrap();
        assert_eq!(backup, dir.path().join("words_backup.json"));
        assert_eq!(fs::read_to_string(backup).unwrap(), "{\"metadata\":{}}");
    }
}
