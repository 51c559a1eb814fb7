//! Word bank consistency checks
//!
//! Finds duplicate words, words shared between difficulty tiers, and tiers
//! holding fewer distinct words than required.

use super::model::WordBank;
use crate::tiers::Difficulty;
use std::collections::{BTreeMap, BTreeSet};

/// Number of sample words shown per tier
pub const TIER_SAMPLE_SIZE: usize = 10;

/// Tunables for the consistency check
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Minimum distinct words each known tier must hold
    pub min_per_tier: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { min_per_tier: 20 }
    }
}

/// Where a word occurs in the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub lesson: String,
    pub difficulty: Difficulty,
    pub meaning: String,
}

/// A word that occurs more than once
#[derive(Debug, Clone)]
pub struct Duplicate {
    pub word: String,
    pub occurrences: Vec<Occurrence>,
}

/// Words shared between two tiers
#[derive(Debug, Clone)]
pub struct TierOverlap {
    pub first: Difficulty,
    pub second: Difficulty,
    pub words: BTreeSet<String>,
}

/// A known tier with too few distinct words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierShortfall {
    pub tier: Difficulty,
    pub count: usize,
    pub required: usize,
}

/// Per-tier statistics
#[derive(Debug, Clone)]
pub struct TierSummary {
    pub tier: Difficulty,
    pub total: usize,
    pub distinct: usize,
    pub samples: Vec<String>,
}

/// Per-lesson breakdown, reported sorted by lesson name
#[derive(Debug, Clone)]
pub struct LessonSummary {
    pub name: String,
    pub phoneme: String,
    pub description: String,
    pub word_count: usize,
    pub by_tier: BTreeMap<Difficulty, Vec<String>>,
}

/// Result of checking a word bank
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub version: Option<String>,
    pub description: Option<String>,
    pub last_updated: Option<String>,
    pub declared_total: Option<usize>,
    pub total_words: usize,
    pub unique_words: usize,
    pub duplicates: Vec<Duplicate>,
    pub tiers: Vec<TierSummary>,
    pub lessons: Vec<LessonSummary>,
    pub overlaps: Vec<TierOverlap>,
    pub shortfalls: Vec<TierShortfall>,
    pub min_per_tier: usize,
}

impl CheckReport {
    /// Duplicates or tier overlaps make the bank inconsistent
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.duplicates.is_empty() || !self.overlaps.is_empty()
    }

    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.total_words - self.unique_words
    }

    /// Distinct words in a tier, zero if absent
    #[must_use]
    pub fn distinct_in(&self, tier: Difficulty) -> usize {
        self.tiers
            .iter()
            .find(|t| t.tier == tier)
            .map_or(0, |t| t.distinct)
    }
}

/// Every word occurring more than once, sorted by word
#[must_use]
pub fn find_duplicates(bank: &WordBank) -> Vec<Duplicate> {
    let mut sources: BTreeMap<String, Vec<Occurrence>> = BTreeMap::new();
    for (lesson, entry) in bank.entries() {
        sources.entry(entry.key()).or_default().push(Occurrence {
            lesson: lesson.to_string(),
            difficulty: entry.difficulty,
            meaning: entry.meaning.clone(),
        });
    }

    sources
        .into_iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .map(|(word, occurrences)| Duplicate { word, occurrences })
        .collect()
}

/// Distinct words per tier, covering every tier present in the bank
#[must_use]
pub fn words_by_tier(bank: &WordBank) -> BTreeMap<Difficulty, BTreeSet<String>> {
    let mut tiers: BTreeMap<Difficulty, BTreeSet<String>> = BTreeMap::new();
    for tier in Difficulty::KNOWN {
        tiers.insert(tier, BTreeSet::new());
    }
    for (_, entry) in bank.entries() {
        tiers.entry(entry.difficulty).or_default().insert(entry.key());
    }
    tiers
}

/// Non-empty pairwise intersections between the known tiers
#[must_use]
pub fn find_tier_overlaps(tiers: &BTreeMap<Difficulty, BTreeSet<String>>) -> Vec<TierOverlap> {
    let empty = BTreeSet::new();
    let mut overlaps = Vec::new();
    for (i, &first) in Difficulty::KNOWN.iter().enumerate() {
        for &second in &Difficulty::KNOWN[i + 1..] {
            let a = tiers.get(&first).unwrap_or(&empty);
            let b = tiers.get(&second).unwrap_or(&empty);
            let words: BTreeSet<String> = a.intersection(b).cloned().collect();
            if !words.is_empty() {
                overlaps.push(TierOverlap {
                    first,
                    second,
                    words,
                });
            }
        }
    }
    overlaps
}

/// Known tiers with fewer than `min_per_tier` distinct words
#[must_use]
pub fn find_shortfalls(
    tiers: &BTreeMap<Difficulty, BTreeSet<String>>,
    min_per_tier: usize,
) -> Vec<TierShortfall> {
    Difficulty::KNOWN
        .iter()
        .map(|&tier| (tier, tiers.get(&tier).map_or(0, BTreeSet::len)))
        .filter(|&(_, count)| count < min_per_tier)
        .map(|(tier, count)| TierShortfall {
            tier,
            count,
            required: min_per_tier,
        })
        .collect()
}

/// Run every consistency check over a bank
#[must_use]
pub fn check_bank(bank: &WordBank, config: &CheckConfig) -> CheckReport {
    let total_words = bank.entry_count();

    let mut tier_totals: BTreeMap<Difficulty, usize> = BTreeMap::new();
    for (_, entry) in bank.entries() {
        *tier_totals.entry(entry.difficulty).or_insert(0) += 1;
    }

    let by_tier = words_by_tier(bank);
    let unique_words = by_tier
        .values()
        .flatten()
        .collect::<BTreeSet<_>>()
        .len();

    let tiers = by_tier
        .iter()
        .filter(|(tier, _)| tier_totals.contains_key(*tier))
        .map(|(&tier, words)| TierSummary {
            tier,
            total: tier_totals.get(&tier).copied().unwrap_or(0),
            distinct: words.len(),
            samples: words.iter().take(TIER_SAMPLE_SIZE).cloned().collect(),
        })
        .collect();

    let mut lessons: Vec<LessonSummary> = bank
        .phonics_lessons
        .iter()
        .map(|(name, lesson)| {
            let mut by_tier: BTreeMap<Difficulty, Vec<String>> = BTreeMap::new();
            for entry in &lesson.words {
                by_tier.entry(entry.difficulty).or_default().push(entry.key());
            }
            LessonSummary {
                name: name.clone(),
                phoneme: lesson.phoneme.clone(),
                description: lesson.description.clone(),
                word_count: lesson.words.len(),
                by_tier,
            }
        })
        .collect();
    lessons.sort_by(|a, b| a.name.cmp(&b.name));

    CheckReport {
        version: bank.metadata.version.clone(),
        description: bank.metadata.description.clone(),
        last_updated: bank.metadata.last_updated.clone(),
        declared_total: bank.metadata.total_words,
        total_words,
        unique_words,
        duplicates: find_duplicates(bank),
        tiers,
        lessons,
        overlaps: find_tier_overlaps(&by_tier),
        shortfalls: find_shortfalls(&by_tier, config.min_per_tier),
        min_per_tier: config.min_per_tier,
    }
}
