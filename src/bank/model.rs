//! Word bank document model
//!
//! Lesson order and unknown fields are preserved so a repaired bank can be
//! written back without losing data.

use crate::core::normalize;
use crate::tiers::Difficulty;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The complete persisted word bank
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordBank {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub phonics_lessons: IndexMap<String, Lesson>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bank-level metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_issues: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named group of words sharing a phonics focus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default)]
    pub phoneme: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub words: Vec<WordEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One vocabulary entry inside a lesson
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub meaning: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordEntry {
    /// Trimmed, lower-cased form used for duplicate and tier comparisons
    #[must_use]
    pub fn key(&self) -> String {
        normalize(&self.word)
    }
}

impl WordBank {
    /// Total number of entries across all lessons
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.phonics_lessons.values().map(|l| l.words.len()).sum()
    }

    /// Iterate `(lesson name, entry)` pairs in document order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &WordEntry)> {
        self.phonics_lessons
            .iter()
            .flat_map(|(name, lesson)| lesson.words.iter().map(move |e| (name.as_str(), e)))
    }
}
