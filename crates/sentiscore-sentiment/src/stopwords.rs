//! Stopword filtering.

use std::collections::HashSet;
use std::path::Path;

use crate::error::SentimentError;

const BUNDLED_ENGLISH: &str = include_str!("../data/stopwords_en.txt");

/// Removes stopwords from a token sequence, preserving the order of survivors.
pub trait StopwordFilter: Send + Sync {
    fn is_stopword(&self, token: &str) -> bool;

    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .collect()
    }
}

/// A fixed set of stopwords, matched case-insensitively.
///
/// Entries are stored lowercase; tokens are lowercased for the check.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// The bundled English list.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Load`] if the bundled list fails to parse.
    pub fn english() -> Result<Self, SentimentError> {
        Self::parse("bundled english stopwords", BUNDLED_ENGLISH)
    }

    /// A list that filters nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a list from disk: one word per line, blank lines and `#` comments ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Io`] if the file cannot be read and
    /// [`SentimentError::Load`] if its contents are invalid.
    pub fn from_path(path: &Path) -> Result<Self, SentimentError> {
        let text = std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&path.display().to_string(), &text)
    }

    /// Parse a stopword list. `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Load`] if a line holds more than one word
    /// or the list has no entries.
    pub fn parse(origin: &str, text: &str) -> Result<Self, SentimentError> {
        let load_err = |reason: String| SentimentError::Load {
            resource: "stopwords",
            origin: origin.to_string(),
            reason,
        };

        let mut words = HashSet::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.split_whitespace().nth(1).is_some() {
                return Err(load_err(format!(
                    "line {}: expected a single word, got '{line}'",
                    idx + 1
                )));
            }
            words.insert(line.to_lowercase());
        }

        if words.is_empty() {
            return Err(load_err("no stopwords found".to_string()));
        }

        tracing::debug!(origin, count = words.len(), "stopword list loaded");
        Ok(Self { words })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordFilter for StopwordList {
    fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }
}
