//! Audio asset gap detection
//!
//! Assets are named `<word>_<suffix>.<ext>`; the set of words that already
//! have one is compared against the vocabulary needed.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Naming convention for audio assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNaming {
    /// Provider tag appended to the word, e.g. `youdao`
    pub suffix: String,
    /// File extension without the dot
    pub extension: String,
}

impl Default for AssetNaming {
    fn default() -> Self {
        Self {
            suffix: "youdao".to_string(),
            extension: "mp3".to_string(),
        }
    }
}

impl AssetNaming {
    /// File name for a word's asset
    ///
    /// # Examples
    /// ```
    /// use word_tetris_tools::audio::AssetNaming;
    ///
    /// assert_eq!(AssetNaming::default().file_name("cat"), "cat_youdao.mp3");
    /// ```
    #[must_use]
    pub fn file_name(&self, word: &str) -> String {
        format!("{word}_{}.{}", self.suffix, self.extension)
    }

    /// Recover the word from an asset file name, if it follows the convention
    #[must_use]
    pub fn word_from_file_name(&self, name: &str) -> Option<String> {
        let tail = format!("_{}.{}", self.suffix, self.extension);
        let name_lower = name.to_lowercase();
        let word = name_lower.strip_suffix(&tail.to_lowercase())?;
        (!word.is_empty()).then(|| word.to_string())
    }
}

/// Words that already have an asset in `audio_dir`
///
/// A missing directory is created and yields an empty set.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or listed.
pub fn existing_assets(audio_dir: &Path, naming: &AssetNaming) -> io::Result<FxHashSet<String>> {
    if !audio_dir.exists() {
        fs::create_dir_all(audio_dir)?;
        return Ok(FxHashSet::default());
    }

    let mut words = FxHashSet::default();
    for entry in fs::read_dir(audio_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(word) = naming.word_from_file_name(&entry.file_name().to_string_lossy()) {
            words.insert(word);
        }
    }
    Ok(words)
}

/// Needed words without an asset, sorted
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use word_tetris_tools::audio::missing_words;
///
/// let needed: FxHashSet<String> = ["cat", "dog"].iter().map(|s| s.to_string()).collect();
/// let existing: FxHashSet<String> = ["cat"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(missing_words(&needed, &existing), vec!["dog".to_string()]);
/// ```
#[must_use]
pub fn missing_words(needed: &FxHashSet<String>, existing: &FxHashSet<String>) -> Vec<String> {
    let mut missing: Vec<String> = needed.difference(existing).cloned().collect();
    missing.sort_unstable();
    missing
}
