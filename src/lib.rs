//! Word Tetris vocabulary tooling
//!
//! Extracts vocabulary from the game's lesson files, checks and repairs the
//! phonics word bank, and keeps the pronunciation audio set complete.
//!
//! # Quick Start
//!
//! ```rust
//! use word_tetris_tools::core::extract;
//!
//! let value = serde_json::json!({"words": [{"word": " Cat "}, {"word": "dog"}]});
//! let tokens = extract(&value);
//! assert_eq!(tokens.len(), 2);
//! assert!(tokens.contains("cat"));
//! ```

// Core domain types
pub mod core;

// Difficulty tiers
pub mod tiers;

// Phonics word bank
pub mod bank;

// Directory scans and CSV report
pub mod scan;

// Pronunciation audio
pub mod audio;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
