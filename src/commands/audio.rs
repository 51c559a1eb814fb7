//! Audio download command
//!
//! Collects the vocabulary from the words tree, diffs it against existing
//! clips and downloads whatever is missing.

use crate::audio::{
    AssetNaming, DownloadConfig, DownloadStats, Downloader, SpeechSource, existing_assets,
    missing_words, needed_words,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Inputs for an audio run
pub struct AudioOptions {
    pub words_dir: PathBuf,
    pub audio_dir: PathBuf,
    pub naming: AssetNaming,
    pub download: DownloadConfig,
    /// List missing words without fetching
    pub dry_run: bool,
}

/// Result of an audio run
pub struct AudioReport {
    pub json_files: usize,
    pub missing: Vec<String>,
    pub stats: DownloadStats,
    pub dry_run: bool,
}

/// Run gap detection and, unless dry-run, download the missing clips
///
/// # Errors
///
/// Returns an error if the words directory cannot be scanned or the audio
/// directory cannot be created or listed. Per-word failures are counted in
/// the stats instead.
pub fn run_audio<S: SpeechSource>(
    options: &AudioOptions,
    source: &S,
    interrupt: Arc<AtomicBool>,
) -> Result<AudioReport> {
    let (needed, json_files) = needed_words(&options.words_dir)
        .with_context(|| format!("Cannot scan {}", options.words_dir.display()))?;
    let existing = existing_assets(&options.audio_dir, &options.naming)
        .with_context(|| format!("Cannot list {}", options.audio_dir.display()))?;

    let missing = missing_words(&needed, &existing);
    let mut stats = DownloadStats {
        total_words: needed.len(),
        existing_files: existing.len(),
        skipped: needed.len() - missing.len(),
        ..DownloadStats::default()
    };

    if !options.dry_run && !missing.is_empty() {
        Downloader::new(
            source,
            &options.audio_dir,
            options.naming.clone(),
            options.download.clone(),
        )
        .with_interrupt(interrupt)
        .run(&missing, &mut stats);
    }

    Ok(AudioReport {
        json_files,
        missing,
        stats,
        dry_run: options.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::FetchError;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    /// Serves a clip for every word except `fail`
    struct FixedSource;

    impl SpeechSource for FixedSource {
        fn fetch(&self, word: &str) -> Result<Vec<u8>, FetchError> {
            if word == "fail" {
                Err(FetchError::Status(503))
            } else {
                Ok(vec![1; 200])
            }
        }
    }

    fn options(words_dir: PathBuf, audio_dir: PathBuf, dry_run: bool) -> AudioOptions {
        AudioOptions {
            words_dir,
            audio_dir,
            naming: AssetNaming::default(),
            download: DownloadConfig {
                retry_delay: Duration::ZERO,
                request_delay: Duration::ZERO,
                show_progress: false,
                ..DownloadConfig::default()
            },
            dry_run,
        }
    }

    fn setup() -> tempfile::TempDir {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("words")).unwrap();
        fs::create_dir(root.path().join("audio")).unwrap();
        fs::write(
            root.path().join("words/day.json"),
            r#"{"words":[{"word":"cat"},{"word":"dog"},{"word":"fail"}]}"#,
        )
        .unwrap();
        fs::write(root.path().join("audio/cat_youdao.mp3"), b"clip").unwrap();
        root
    }

    #[test]
    fn downloads_only_missing_words() {
        let root = setup();
        let opts = options(root.path().join("words"), root.path().join("audio"), false);

        let report = run_audio(&opts, &FixedSource, Arc::new(AtomicBool::new(false))).unwrap();
        assert_eq!(report.missing, vec!["dog", "fail"]);
        assert_eq!(report.stats.total_words, 3);
        assert_eq!(report.stats.existing_files, 1);
        assert_eq!(report.stats.skipped, 1);
        assert_eq!(report.stats.downloaded, 1);
        assert_eq!(report.stats.failed, 1);
        assert!(root.path().join("audio/dog_youdao.mp3").exists());
    }

    #[test]
    fn dry_run_fetches_nothing() {
        let root = setup();
        let opts = options(root.path().join("words"), root.path().join("audio"), true);

        let report = run_audio(&opts, &FixedSource, Arc::new(AtomicBool::new(false))).unwrap();
        assert_eq!(report.missing.len(), 2);
        assert_eq!(report.stats.downloaded, 0);
        assert!(!root.path().join("audio/dog_youdao.mp3").exists());
    }

    #[test]
    fn missing_words_dir_is_fatal() {
        let root = tempdir().unwrap();
        let opts = options(root.path().join("nope"), root.path().join("audio"), false);
        assert!(run_audio(&opts, &FixedSource, Arc::new(AtomicBool::new(false))).is_err());
    }
}
