//! Single-file JSON validation command
//!
//! Fails fast on unreadable or malformed JSON; otherwise reports the lesson
//! metadata and how many vocabulary tokens the file holds.

use crate::core::extract;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Result of validating one lesson file
pub struct ValidationReport {
    pub file: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub token_count: usize,
}

fn metadata_field(doc: &Value, key: &str) -> Option<String> {
    match doc.get("metadata")?.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Parse a JSON file and summarize it
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let doc: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    Ok(ValidationReport {
        file: path.display().to_string(),
        id: metadata_field(&doc, "id"),
        name: metadata_field(&doc, "name"),
        token_count: extract(&doc).len(),
    })
}
