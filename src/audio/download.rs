//! Sequential audio download driver
//!
//! Fetches each missing word in turn with a bounded retry and a fixed pause
//! between words. Failures are counted, never fatal. The run owns its
//! `DownloadStats` and returns them.

use super::fetch::{FetchError, SpeechSource};
use super::gap::AssetNaming;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Retry, delay and validation settings
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Attempts per word, including the first
    pub max_attempts: usize,
    /// Pause between attempts for the same word
    pub retry_delay: Duration,
    /// Pause between words
    pub request_delay: Duration,
    /// Smallest body accepted as a real clip
    pub min_bytes: usize,
    pub show_progress: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
            request_delay: Duration::from_millis(300),
            min_bytes: 100,
            show_progress: true,
        }
    }
}

/// Outcome counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadStats {
    /// Distinct words needed
    pub total_words: usize,
    /// Asset files already present
    pub existing_files: usize,
    pub downloaded: usize,
    pub failed: usize,
    /// Needed words that already had an asset
    pub skipped: usize,
    /// Words never attempted because the run was interrupted
    pub pending: usize,
    pub interrupted: bool,
    /// Words that failed after every attempt
    pub failed_words: Vec<String>,
}

/// Downloads missing clips into an audio directory
pub struct Downloader<'a, S: SpeechSource> {
    source: &'a S,
    audio_dir: PathBuf,
    naming: AssetNaming,
    config: DownloadConfig,
    interrupt: Arc<AtomicBool>,
}

impl<'a, S: SpeechSource> Downloader<'a, S> {
    #[must_use]
    pub fn new(
        source: &'a S,
        audio_dir: &Path,
        naming: AssetNaming,
        config: DownloadConfig,
    ) -> Self {
        Self {
            source,
            audio_dir: audio_dir.to_path_buf(),
            naming,
            config,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use an externally owned interrupt flag (set by a Ctrl-C handler)
    #[must_use]
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Fetch one word with retries, writing the clip on success
    ///
    /// # Errors
    ///
    /// Returns the last `FetchError` once every attempt has failed. A
    /// `FetchError::Write` ends the word at once, without further attempts.
    pub fn download_word(&self, word: &str) -> Result<PathBuf, FetchError> {
        let attempts = self.config.max_attempts.max(1);
        let mut last_error = FetchError::Network("no attempt made".to_string());

        for attempt in 1..=attempts {
            match self.try_once(word) {
                Ok(path) => return Ok(path),
                Err(e @ FetchError::Write(..)) => {
                    tracing::warn!(word = %word, "Download failed: {e}");
                    return Err(e);
                }
                Err(e) => {
                    tracing::debug!(word = %word, attempt, "Attempt failed: {e}");
                    last_error = e;
                    if attempt < attempts {
                        thread::sleep(self.config.retry_delay);
                    }
                }
            }
        }

        tracing::warn!(word = %word, "Download failed: {last_error}");
        Err(last_error)
    }

    fn try_once(&self, word: &str) -> Result<PathBuf, FetchError> {
        let bytes = self.source.fetch(word)?;
        if bytes.len() < self.config.min_bytes {
            return Err(FetchError::TooSmall(bytes.len()));
        }
        let path = self.audio_dir.join(self.naming.file_name(word));
        if let Err(e) = fs::write(&path, &bytes) {
            return Err(FetchError::Write(path, e.to_string()));
        }
        Ok(path)
    }

    /// Download every word in order, updating `stats`
    ///
    /// Stops early when the interrupt flag is set; the remaining words are
    /// counted in `stats.pending`.
    pub fn run(&self, words: &[String], stats: &mut DownloadStats) {
        let pb = if self.config.show_progress {
            ProgressBar::new(words.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );

        for (idx, word) in words.iter().enumerate() {
            if self.interrupt.load(Ordering::SeqCst) {
                stats.interrupted = true;
                stats.pending = words.len() - idx;
                pb.abandon_with_message("Interrupted");
                return;
            }

            pb.set_message(word.clone());
            match self.download_word(word) {
                Ok(path) => {
                    tracing::info!("Saved {}", path.display());
                    stats.downloaded += 1;
                }
                Err(_) => {
                    stats.failed += 1;
                    stats.failed_words.push(word.clone());
                }
            }
            pb.inc(1);

            if idx + 1 < words.len() {
                thread::sleep(self.config.request_delay);
            }
        }

        pb.finish_with_message("Complete!");
    }
}
