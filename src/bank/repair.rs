//! Word bank repair
//!
//! Removes duplicate entries (first occurrence wins, in lesson order), then
//! reassigns every tier from word length plus the exception table, and finally
//! refreshes the bank metadata.

use super::model::WordBank;
use crate::tiers::{Difficulty, assign_tier};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// An entry dropped because its word appeared earlier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedDuplicate {
    pub lesson: String,
    pub word: String,
}

/// A tier reassignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierChange {
    pub lesson: String,
    pub word: String,
    pub old: Difficulty,
    pub new: Difficulty,
}

/// Summary of a repair pass
#[derive(Debug, Clone, Default)]
pub struct RepairResult {
    pub removed: Vec<RemovedDuplicate>,
    pub changes: Vec<TierChange>,
    pub total_words: usize,
    pub distribution: BTreeMap<Difficulty, usize>,
    pub version: Option<String>,
}

impl RepairResult {
    /// Entries in a tier after repair
    #[must_use]
    pub fn count_in(&self, tier: Difficulty) -> usize {
        self.distribution.get(&tier).copied().unwrap_or(0)
    }
}

/// Drop every entry whose normalized word was already seen
pub fn remove_duplicates(bank: &mut WordBank) -> Vec<RemovedDuplicate> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut removed = Vec::new();

    for (lesson_name, lesson) in &mut bank.phonics_lessons {
        lesson.words.retain(|entry| {
            let key = entry.key();
            if seen.insert(key.clone()) {
                true
            } else {
                tracing::debug!(lesson = %lesson_name, word = %key, "dropping duplicate");
                removed.push(RemovedDuplicate {
                    lesson: lesson_name.clone(),
                    word: key,
                });
                false
            }
        });
    }

    removed
}

/// Reassign tiers by length and exception table, returning what changed
pub fn rebalance_tiers(bank: &mut WordBank) -> Vec<TierChange> {
    let mut changes = Vec::new();

    for (lesson_name, lesson) in &mut bank.phonics_lessons {
        for entry in &mut lesson.words {
            let new = assign_tier(&entry.word);
            if entry.difficulty != new {
                changes.push(TierChange {
                    lesson: lesson_name.clone(),
                    word: entry.word.clone(),
                    old: entry.difficulty,
                    new,
                });
                entry.difficulty = new;
            }
        }
    }

    changes
}

/// Increment the last numeric component of a dotted version
///
/// Returns `None` when the version is not purely numeric or the last
/// component cannot be incremented.
///
/// # Examples
/// ```
/// use word_tetris_tools::bank::bump_version;
///
/// assert_eq!(bump_version("1.1").as_deref(), Some("1.2"));
/// assert_eq!(bump_version("2").as_deref(), Some("3"));
/// assert_eq!(bump_version("beta"), None);
/// ```
#[must_use]
pub fn bump_version(version: &str) -> Option<String> {
    let mut parts: Vec<u64> = version
        .trim()
        .split('.')
        .map(|p| p.parse().ok())
        .collect::<Option<_>>()?;
    let last = parts.last_mut()?;
    *last = last.checked_add(1)?;
    Some(
        parts
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("."),
    )
}

/// Deduplicate, rebalance and refresh metadata
///
/// `today` is written to `lastUpdated`, formatted `YYYY-MM-DD`.
pub fn repair_bank(bank: &mut WordBank, today: &str) -> RepairResult {
    let removed = remove_duplicates(bank);
    let changes = rebalance_tiers(bank);

    let total_words = bank.entry_count();
    let mut distribution: BTreeMap<Difficulty, usize> = BTreeMap::new();
    for (_, entry) in bank.entries() {
        *distribution.entry(entry.difficulty).or_insert(0) += 1;
    }

    let mut result = RepairResult {
        removed,
        changes,
        total_words,
        distribution,
        version: None,
    };

    let metadata = &mut bank.metadata;
    metadata.total_words = Some(total_words);
    if let Some(next) = metadata.version.as_deref().and_then(bump_version) {
        metadata.version = Some(next);
    }
    metadata.last_updated = Some(today.to_string());
    metadata.fixed_issues.get_or_insert_with(Vec::new).extend([
        format!("Removed {} duplicate words", result.removed.len()),
        format!("Rebalanced {} word difficulties", result.changes.len()),
        format!(
            "Final distribution: Diff1={}, Diff2={}, Diff3={}",
            result.count_in(Difficulty::EASY),
            result.count_in(Difficulty::MEDIUM),
            result.count_in(Difficulty::HARD)
        ),
    ]);

    result.version.clone_from(&metadata.version);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::model::{Lesson, WordEntry};

    fn entry(word: &str, tier: u8) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            difficulty: Difficulty::new(tier),
            ..WordEntry::default()
        }
    }

    fn sample_bank() -> WordBank {
        let mut bank = WordBank::default();
        bank.metadata.version = Some("1.1".to_string());
        bank.phonics_lessons.insert(
            "l1".to_string(),
            Lesson {
                words: vec![entry("cat", 2), entry("butterfly", 1), entry("camera", 1)],
                ..Lesson::default()
            },
        );
        bank.phonics_lessons.insert(
            "l2".to_string(),
            Lesson {
                words: vec![entry("Cat", 1), entry("apple", 2), entry("cat", 3)],
                ..Lesson::default()
            },
        );
        bank
    }

    #[test]
    fn first_occurrence_wins() {
        let mut bank = sample_bank();
        let removed = remove_duplicates(&mut bank);
        assert_eq!(removed.len(), 2);
        assert!(removed.iter().all(|r| r.lesson == "l2" && r.word == "cat"));
        assert_eq!(bank.phonics_lessons["l1"].words.len(), 3);
        assert_eq!(bank.phonics_lessons["l2"].words.len(), 1);
        assert_eq!(bank.phonics_lessons["l2"].words[0].word, "apple");
    }

    #[test]
    fn tiers_follow_length_and_exceptions() {
        let mut bank = sample_bank();
        remove_duplicates(&mut bank);
        let changes = rebalance_tiers(&mut bank);

        let l1 = &bank.phonics_lessons["l1"].words;
        assert_eq!(l1[0].difficulty, Difficulty::EASY); // cat, 3 letters
        assert_eq!(l1[1].difficulty, Difficulty::HARD); // butterfly, 9 letters
        assert_eq!(l1[2].difficulty, Difficulty::HARD); // camera, exception
        assert_eq!(changes.len(), 3);
        // apple was already medium
        assert!(changes.iter().all(|c| c.word != "apple"));
    }

    #[test]
    fn repair_updates_metadata() {
        let mut bank = sample_bank();
        let result = repair_bank(&mut bank, "2026-10-18");

        assert_eq!(result.total_words, 4);
        assert_eq!(result.count_in(Difficulty::EASY), 1);
        assert_eq!(result.count_in(Difficulty::MEDIUM), 1);
        assert_eq!(result.count_in(Difficulty::HARD), 2);
        assert_eq!(result.version.as_deref(), Some("1.2"));

        let meta = &bank.metadata;
        assert_eq!(meta.total_words, Some(4));
        assert_eq!(meta.last_updated.as_deref(), Some("2026-10-18"));
        assert_eq!(
            meta.fixed_issues.as_deref().unwrap(),
            &[
                "Removed 2 duplicate words".to_string(),
                "Rebalanced 3 word difficulties".to_string(),
                "Final distribution: Diff1=1, Diff2=1, Diff3=2".to_string(),
            ]
        );
    }

    #[test]
    fn fixed_issues_accumulate() {
        let mut bank = sample_bank();
        bank.metadata.fixed_issues = Some(vec!["earlier fix".to_string()]);
        repair_bank(&mut bank, "2026-10-18");
        let issues = bank.metadata.fixed_issues.unwrap();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0], "earlier fix");
    }

    #[test]
    fn repair_is_stable_on_second_pass() {
        let mut bank = sample_bank();
        repair_bank(&mut bank, "2026-10-18");
        let second = repair_bank(&mut bank, "2026-10-18");
        assert!(second.removed.is_empty());
        assert!(second.changes.is_empty());
        assert_eq!(second.version.as_deref(), Some("1.3"));
    }

    #[test]
    fn non_numeric_version_is_kept() {
        let mut bank = sample_bank();
        bank.metadata.version = Some("beta".to_string());
        repair_bank(&mut bank, "2026-10-18");
        assert_eq!(bank.metadata.version.as_deref(), Some("beta"));
        assert_eq!(bump_version("1.x"), None);
        assert_eq!(bump_version("1.18446744073709551615"), None);

        bank.metadata.version = Some("2.18446744073709551615".to_string());
        repair_bank(&mut bank, "2026-10-18");
        assert_eq!(
            bank.metadata.version.as_deref(),
            Some("2.18446744073709551615")
        );
    }
}
