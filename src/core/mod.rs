//! Core vocabulary types
//!
//! Token normalization and the recursive `word`-key extraction shared by every
//! batch tool in this crate.

mod extract;
mod token;

pub use extract::{TokenSet, WORD_KEY, extract, extract_from_text, text_word_counts};
pub use token::{MIN_TOKEN_LEN, TokenError, VocabularyToken, normalize};
