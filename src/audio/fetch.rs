//! Text-to-speech fetching
//!
//! `SpeechSource` is the seam between the download driver and the network so
//! the driver can run against a stub in tests.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default pronunciation endpoint; `{word}` is replaced by the word
pub const DEFAULT_ENDPOINT: &str = "https://dict.youdao.com/dictvoice?audio={word}&type=1";

/// Placeholder substituted in the endpoint template
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("word_tetris_tools/", env!("CARGO_PKG_VERSION"));

/// Audio fetch errors
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Endpoint template produced an invalid URL
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, String),

    /// Request could not be sent or the body not read
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP {0}")]
    Status(u16),

    /// Response too small to be a real clip
    #[error("Audio too small ({0} bytes), likely invalid")]
    TooSmall(usize),

    /// Clip was fetched but could not be saved
    #[error("Failed to write {}: {1}", .0.display())]
    Write(PathBuf, String),
}

/// Something that can produce an audio clip for a word
pub trait SpeechSource {
    /// Fetch the raw audio bytes for `word`
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the clip cannot be obtained.
    fn fetch(&self, word: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP client for a templated TTS endpoint
pub struct HttpSpeechSource {
    http_client: reqwest::blocking::Client,
    template: String,
}

impl HttpSpeechSource {
    /// Create a client for an endpoint template containing `{word}`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the template lacks the placeholder,
    /// or `FetchError::Network` if the HTTP client cannot be built.
    pub fn new(template: &str) -> Result<Self, FetchError> {
        if !template.contains(WORD_PLACEHOLDER) {
            return Err(FetchError::InvalidUrl(
                template.to_string(),
                format!("missing {WORD_PLACEHOLDER} placeholder"),
            ));
        }

        let http_client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            template: template.to_string(),
        })
    }

    /// URL for a word; the URL parser percent-encodes characters like `'`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the result does not parse.
    pub fn url_for(&self, word: &str) -> Result<reqwest::Url, FetchError> {
        let raw = self.template.replace(WORD_PLACEHOLDER, word);
        reqwest::Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(raw, e.to_string()))
    }
}

impl SpeechSource for HttpSpeechSource {
    fn fetch(&self, word: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url_for(word)?;
        tracing::debug!(word = %word, url = %url, "Requesting audio");

        let response = self
            .http_client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_requires_placeholder() {
        assert!(matches!(
            HttpSpeechSource::new("https://example.com/tts"),
            Err(FetchError::InvalidUrl(..))
        ));
    }

    #[test]
    fn url_substitutes_word() {
        let source = HttpSpeechSource::new(DEFAULT_ENDPOINT).unwrap();
        let url = source.url_for("cat").unwrap();
        assert_eq!(url.as_str(), "https://dict.youdao.com/dictvoice?audio=cat&type=1");
    }

    #[test]
    fn url_encodes_apostrophe() {
        let source = HttpSpeechSource::new(DEFAULT_ENDPOINT).unwrap();
        let url = source.url_for("don't").unwrap();
        assert!(url.as_str().contains("audio=don%27t"));
    }

    #[test]
    fn invalid_template_url_is_reported() {
        let source = HttpSpeechSource::new("not a url {word}").unwrap();
        assert!(matches!(source.url_for("cat"), Err(FetchError::InvalidUrl(..))));
    }
}
