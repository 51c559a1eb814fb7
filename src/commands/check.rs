//! Word-bank check command

use crate::bank::{CheckConfig, CheckReport, check_bank, load_bank};
use anyhow::Result;
use std::path::Path;

/// Load a bank and run every consistency check
///
/// # Errors
///
/// Returns an error if the bank file is missing or malformed.
pub fn check_bank_file(path: &Path, config: &CheckConfig) -> Result<CheckReport> {
    let bank = load_bank(path)?;
    Ok(check_bank(&bank, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn check_reports_duplicate_and_overlap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(
            &path,
            r#"{"metadata":{"version":"1.0"},"phonicsLessons":{
                "l1":{"phoneme":"a","description":"","words":[{"word":"cat","difficulty":1,"meaning":""}]},
                "l2":{"phoneme":"b","description":"","words":[{"word":"Cat","difficulty":2,"meaning":""}]}
            }}"#,
        )
        .unwrap();

        let report = check_bank_file(&path, &CheckConfig::default()).unwrap();
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.overlaps.len(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn check_missing_bank_fails() {
        let dir = tempdir().unwrap();
        assert!(check_bank_file(&dir.path().join("words.json"), &CheckConfig::default()).is_err());
    }
}
