//! Difficulty tiers
//!
//! The word bank classifies every entry into one of three tiers. The repair
//! pass reassigns tiers from word length, which is a blunt heuristic: a fixed
//! exception table overrides it for a handful of known words.

mod embedded;

pub use embedded::{TIER_EXCEPTIONS, TIER_EXCEPTIONS_COUNT};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a word-bank entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const EASY: Self = Self(1);
    pub const MEDIUM: Self = Self(2);
    pub const HARD: Self = Self(3);

    /// The tiers every bank is expected to populate, in order
    pub const KNOWN: [Self; 3] = [Self::EASY, Self::MEDIUM, Self::HARD];

    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::EASY
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longest word (in characters) that stays in the easy tier
pub const EASY_MAX_LEN: usize = 4;
/// Longest word (in characters) that stays in the medium tier
pub const MEDIUM_MAX_LEN: usize = 7;

/// Look up a word in the exception table
#[must_use]
pub fn exception_for(word: &str) -> Option<Difficulty> {
    let word = word.trim().to_lowercase();
    TIER_EXCEPTIONS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, tier)| Difficulty(tier))
}

/// Tier implied by word length alone
#[must_use]
pub fn tier_for_length(len: usize) -> Difficulty {
    if len <= EASY_MAX_LEN {
        Difficulty::EASY
    } else if len <= MEDIUM_MAX_LEN {
        Difficulty::MEDIUM
    } else {
        Difficulty::HARD
    }
}

/// Assign a tier to a word: exception table first, then length
///
/// # Examples
/// ```
/// use word_tetris_tools::tiers::{Difficulty, assign_tier};
///
/// assert_eq!(assign_tier("cat"), Difficulty::EASY);
/// assert_eq!(assign_tier("elephant"), Difficulty::HARD);
/// assert_eq!(assign_tier("camera"), Difficulty::HARD); // exception
/// ```
#[must_use]
pub fn assign_tier(word: &str) -> Difficulty {
    exception_for(word).unwrap_or_else(|| tier_for_length(word.trim().chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceptions_count_matches_const() {
        assert_eq!(TIER_EXCEPTIONS.len(), TIER_EXCEPTIONS_COUNT);
    }

    #[test]
    fn exceptions_are_lowercase_known_tiers() {
        for &(word, tier) in TIER_EXCEPTIONS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Exception '{word}' contains non-lowercase chars"
            );
            assert!(Difficulty::KNOWN.contains(&Difficulty(tier)));
        }
    }

    #[test]
    fn length_thresholds() {
        assert_eq!(tier_for_length(2), Difficulty::EASY);
        assert_eq!(tier_for_length(4), Difficulty::EASY);
        assert_eq!(tier_for_length(5), Difficulty::MEDIUM);
        assert_eq!(tier_for_length(7), Difficulty::MEDIUM);
        assert_eq!(tier_for_length(8), Difficulty::HARD);
    }

    #[test]
    fn three_letter_word_is_easy() {
        assert_eq!(assign_tier("dog"), Difficulty::EASY);
    }

    #[test]
    fn nine_letter_word_is_hard() {
        assert_eq!(assign_tier("butterfly"), Difficulty::HARD);
    }

    #[test]
    fn exceptions_override_length() {
        // 6 letters would be medium by length
        assert_eq!(assign_tier("camera"), Difficulty::HARD);
        // 5 letters, already medium, stays medium
        assert_eq!(assign_tier("Pizza"), Difficulty::MEDIUM);
        assert_eq!(exception_for("important"), Some(Difficulty::HARD));
        assert_eq!(exception_for("cat"), None);
    }

    #[test]
    fn difficulty_serializes_as_number() {
        let json = serde_json::to_string(&Difficulty::MEDIUM).unwrap();
        assert_eq!(json, "2");
        let parsed: Difficulty = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, Difficulty::HARD);
    }
}
