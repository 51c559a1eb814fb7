//! Vocabulary extraction from JSON documents and free text
//!
//! Only a field literally named `word` with a string value counts as vocabulary.
//! Every other string (ids, names, filenames, descriptions) is ignored, but
//! nested objects and arrays are always traversed.

use super::token::{MIN_TOKEN_LEN, TOKEN_PATTERN, VocabularyToken};
use regex::Regex;
use rustc_hash::FxHashSet;
use serde_json::Value;
use std::sync::LazyLock;

/// Key that marks a vocabulary entry
pub const WORD_KEY: &str = "word";

/// Word runs for document statistics: at most one hyphen or apostrophe joint
static DOCUMENT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:[-'][A-Za-z]+)?").expect("word pattern is valid"));

/// Set of distinct tokens found in one document
pub type TokenSet = FxHashSet<VocabularyToken>;

/// Recursively collect vocabulary tokens from a parsed JSON value
///
/// # Examples
/// ```
/// use serde_json::json;
/// use word_tetris_tools::core::extract;
///
/// let doc = json!({"id": "day01", "words": [{"word": "Sun"}, {"word": "sun"}]});
/// let tokens = extract(&doc);
/// assert_eq!(tokens.len(), 1);
/// assert!(tokens.contains("sun"));
/// ```
#[must_use]
pub fn extract(node: &Value) -> TokenSet {
    let mut tokens = TokenSet::default();
    collect_into(node, &mut tokens);
    tokens
}

fn collect_into(node: &Value, tokens: &mut TokenSet) {
    match node {
        Value::Object(map) => {
            if let Some(Value::String(raw)) = map.get(WORD_KEY) {
                if let Ok(token) = VocabularyToken::new(raw) {
                    tokens.insert(token);
                }
            }
            for value in map.values() {
                if value.is_object() || value.is_array() {
                    collect_into(value, tokens);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_into(item, tokens);
            }
        }
        // Bare primitives carry no vocabulary on their own
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

/// Scan raw text for token-shaped words
///
/// Lower-confidence path used when a file is not valid JSON: every letter run
/// (optionally hyphen/apostrophe joined) of two or more characters is kept.
///
/// # Examples
/// ```
/// use word_tetris_tools::core::extract_from_text;
///
/// let tokens = extract_from_text("{ \"word\": \"Cat\", broken");
/// assert!(tokens.contains("cat"));
/// assert!(tokens.contains("broken"));
/// assert!(tokens.contains("word"));
/// ```
#[must_use]
pub fn extract_from_text(text: &str) -> TokenSet {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| w.len() >= MIN_TOKEN_LEN)
        .filter_map(|w| VocabularyToken::new(w).ok())
        .collect()
}

/// Count every word in text, including repeats and single letters
///
/// A word is a letter run with at most one hyphen or apostrophe joint, so
/// `mother-in-law` counts as `mother-in` and `law`.
/// Returns `(total_matches, distinct_lowercased)`.
#[must_use]
pub fn text_word_counts(text: &str) -> (usize, FxHashSet<String>) {
    let mut total = 0;
    let mut distinct = FxHashSet::default();
    for m in DOCUMENT_WORD.find_iter(text) {
        total += 1;
        distinct.insert(m.as_str().to_lowercase());
    }
    (total, distinct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sorted(tokens: &TokenSet) -> Vec<&str> {
        let mut words: Vec<&str> = tokens.iter().map(VocabularyToken::as_str).collect();
        words.sort_unstable();
        words
    }

    #[test]
    fn null_yields_nothing() {
        assert!(extract(&Value::Null).is_empty());
    }

    #[test]
    fn primitives_yield_nothing() {
        assert!(extract(&json!("apple")).is_empty());
        assert!(extract(&json!(42)).is_empty());
        assert!(extract(&json!(true)).is_empty());
        assert!(extract(&json!(["apple", "banana"])).is_empty());
    }

    #[test]
    fn word_key_is_collected() {
        let tokens = extract(&json!({"word": "Apple"}));
        assert_eq!(sorted(&tokens), vec!["apple"]);
    }

    #[test]
    fn case_variants_collapse() {
        let upper = extract(&json!({"word": "Apple"}));
        let lower = extract(&json!({"word": "apple"}));
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn other_string_fields_ignored() {
        let doc = json!({
            "id": "day01",
            "name": "Daily Phonics",
            "description": "short vowels",
            "audio": "cat_youdao.mp3",
            "word": "cat"
        });
        assert_eq!(sorted(&extract(&doc)), vec!["cat"]);
    }

    #[test]
    fn invalid_word_values_skipped_but_children_traversed() {
        let doc = json!([
            {"word": 7, "extra": {"word": "dog"}},
            {"word": "a", "items": [{"word": "fish"}]},
            {"word": "ice cream", "more": [{"word": "sun"}]},
            {"word": null}
        ]);
        assert_eq!(sorted(&extract(&doc)), vec!["dog", "fish", "sun"]);
    }

    #[test]
    fn deep_nesting_is_traversed() {
        let doc = json!({
            "metadata": {"id": "x"},
            "lessons": {
                "l1": {"words": [{"word": "Sun"}, {"word": "sun"}, {"word": "Moon"}]},
                "l2": {"groups": [[{"word": "star"}]]}
            }
        });
        assert_eq!(sorted(&extract(&doc)), vec!["moon", "star", "sun"]);
    }

    #[test]
    fn word_object_with_nested_words() {
        let doc = json!({"word": "tree", "examples": [{"word": "forest"}]});
        assert_eq!(sorted(&extract(&doc)), vec!["forest", "tree"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = json!({"a": [{"word": "Cat"}, {"b": {"word": "dog"}}]});
        assert_eq!(extract(&doc), extract(&doc));
    }

    #[test]
    fn text_fallback_filters_single_letters() {
        let tokens = extract_from_text("A cat, a DOG and don't well-known x");
        assert_eq!(
            sorted(&tokens),
            vec!["and", "cat", "dog", "don't", "well-known"]
        );
    }

    #[test]
    fn text_fallback_on_empty_text() {
        assert!(extract_from_text("").is_empty());
        assert!(extract_from_text("123 456 !!").is_empty());
    }

    #[test]
    fn text_word_counts_keeps_repeats() {
        let (total, distinct) = text_word_counts("The cat and the Cat. A dog");
        assert_eq!(total, 7);
        assert_eq!(distinct.len(), 5); // the, cat, and, a, dog
        assert!(distinct.contains("a"));
    }

    #[test]
    fn text_word_counts_split_after_one_joint() {
        let (total, distinct) = text_word_counts("mother-in-law");
        assert_eq!(total, 2);
        assert!(distinct.contains("mother-in"));
        assert!(distinct.contains("law"));
    }
}
