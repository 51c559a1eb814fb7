//! Pronunciation audio assets
//!
//! Works out which vocabulary words lack an audio clip and downloads them from
//! a text-to-speech endpoint.

mod download;
mod fetch;
mod gap;

pub use download::{DownloadConfig, DownloadStats, Downloader};
pub use fetch::{
    DEFAULT_ENDPOINT, FetchError, HttpSpeechSource, REQUEST_TIMEOUT, SpeechSource,
    WORD_PLACEHOLDER,
};
pub use gap::{AssetNaming, existing_assets, missing_words};

use crate::scan::{ScanConfig, ScanError, scan_directory};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Files in the words tree that never hold vocabulary
pub const NON_VOCABULARY_FILES: [&str; 2] = ["config.json", "manifest.json"];

/// Scan settings for audio: JSON only, no text fallback
#[must_use]
pub fn audio_scan_config() -> ScanConfig {
    ScanConfig {
        text_fallback: false,
        skip_names: NON_VOCABULARY_FILES.iter().map(ToString::to_string).collect(),
        skip_paths: Vec::new(),
    }
}

/// Every distinct word needing a clip, with the number of files scanned
///
/// # Errors
///
/// Returns `ScanError` if `words_dir` is missing or not a directory.
pub fn needed_words(words_dir: &Path) -> Result<(FxHashSet<String>, usize), ScanError> {
    let result = scan_directory(words_dir, &audio_scan_config())?;
    let words = result
        .all_tokens()
        .into_iter()
        .map(crate::core::VocabularyToken::into_string)
        .collect();
    Ok((words, result.file_count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn needed_words_skip_config_and_bad_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("day01.json"), r#"{"words":[{"word":"Cat"},{"word":"dog"}]}"#)
            .unwrap();
        fs::write(dir.path().join("config.json"), r#"{"word":"settings"}"#).unwrap();
        fs::write(dir.path().join("broken.json"), r#"{"word":"zebra""#).unwrap();

        let (words, files) = needed_words(dir.path()).unwrap();
        assert_eq!(files, 1);
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn gap_against_existing_assets() {
        let words_dir = tempdir().unwrap();
        let audio_dir = tempdir().unwrap();
        fs::write(
            words_dir.path().join("a.json"),
            r#"[{"word":"cat"},{"word":"dog"}]"#,
        )
        .unwrap();
        fs::write(audio_dir.path().join("cat_youdao.mp3"), b"clip").unwrap();

        let (needed, _) = needed_words(words_dir.path()).unwrap();
        let existing = existing_assets(audio_dir.path(), &AssetNaming::default()).unwrap();
        assert_eq!(missing_words(&needed, &existing), vec!["dog"]);
    }
}
