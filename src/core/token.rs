//! Vocabulary token representation
//!
//! A `VocabularyToken` is a normalized word: trimmed, lower-cased, ASCII letters
//! with optional internal hyphens or apostrophes, at least two characters long.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum length of a token after normalization
pub const MIN_TOKEN_LEN: usize = 2;

/// Letter runs optionally joined by single hyphens or apostrophes
pub(crate) static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:[-'][A-Za-z]+)*").expect("token pattern is valid"));

static TOKEN_FULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:[-'][A-Za-z]+)*$").expect("token pattern is valid"));

/// A normalized vocabulary word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VocabularyToken(String);

/// Error type for strings that are not valid tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    TooShort(usize),
    InvalidCharacters,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Token must be at least {MIN_TOKEN_LEN} characters, got {len}")
            }
            Self::InvalidCharacters => write!(
                f,
                "Token must be ASCII letters optionally joined by '-' or '\''"
            ),
        }
    }
}

impl std::error::Error for TokenError {}

/// Trim and lower-case a raw word
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl VocabularyToken {
    /// Create a token from a raw string, normalizing it first
    ///
    /// # Errors
    /// Returns `TokenError` if the normalized text:
    /// - Is shorter than two characters
    /// - Is not letter runs joined by hyphens or apostrophes
    ///
    /// # Examples
    /// ```
    /// use word_tetris_tools::core::VocabularyToken;
    ///
    /// let token = VocabularyToken::new("  Apple ").unwrap();
    /// assert_eq!(token.as_str(), "apple");
    ///
    /// assert!(VocabularyToken::new("a").is_err());
    /// assert!(VocabularyToken::new("ice cream").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, TokenError> {
        let text = normalize(raw);

        if !TOKEN_FULL.is_match(&text) {
            return Err(TokenError::InvalidCharacters);
        }

        // The pattern guarantees ASCII, so byte length equals char count
        if text.len() < MIN_TOKEN_LEN {
            return Err(TokenError::TooShort(text.len()));
        }

        Ok(Self(text))
    }

    /// Get the token as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the token
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; tokens have at least two characters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for VocabularyToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for VocabularyToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VocabularyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
