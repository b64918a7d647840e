//! AFINN-style word valence lexicon.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use crate::error::SentimentError;
use crate::stemmer::Stemmer;

const BUNDLED_AFINN: &str = include_str!("../data/afinn.tsv");

/// Lowest valence an entry may carry.
pub const MIN_SCORE: i32 = -5;
/// Highest valence an entry may carry.
pub const MAX_SCORE: i32 = 5;

/// Word → integer valence table.
///
/// Keys are lowercase. Insertion order is kept so derived indexes are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    scores: HashMap<String, i32>,
    order: Vec<String>,
}

impl Lexicon {
    /// The bundled AFINN-style table.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Load`] if the bundled table fails to parse.
    pub fn afinn() -> Result<Self, SentimentError> {
        Self::parse("bundled afinn lexicon", BUNDLED_AFINN)
    }

    /// Build a lexicon from in-memory pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for (word, score) in pairs {
            lexicon.insert(word.as_ref().to_lowercase(), score);
        }
        lexicon
    }

    /// Load a table from disk. See [`Lexicon::parse`] for the format.
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

    /// Parse `word<TAB>score` lines. Blank lines and `#` comments are ignored.
    ///
    /// Multi-word phrases are skipped: the tokenizer never produces them, so
    /// they could never match.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Load`] on a line without a tab, a score that
    /// is not an integer in `[-5, 5]`, or a table with no usable entries.
    pub fn parse(origin: &str, text: &str) -> Result<Self, SentimentError> {
        let load_err = |reason: String| SentimentError::Load {
            resource: "lexicon",
            origin: origin.to_string(),
            reason,
        };

        let mut lexicon = Self::default();
        let mut phrases = 0_usize;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((word, raw_score)) = trimmed.rsplit_once('\t') else {
                return Err(load_err(format!(
                    "line {line_no}: expected 'word<TAB>score', got '{trimmed}'"
                )));
            };

            let word = word.trim();
            if word.is_empty() {
                return Err(load_err(format!("line {line_no}: empty word")));
            }

            let score: i32 = raw_score.trim().parse().map_err(|e| {
                load_err(format!("line {line_no}: invalid score '{raw_score}': {e}"))
            })?;
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(load_err(format!(
                    "line {line_no}: score {score} outside [{MIN_SCORE}, {MAX_SCORE}]"
                )));
            }

            if word.split_whitespace().nth(1).is_some() {
                phrases += 1;
                continue;
            }

            lexicon.insert(word.to_lowercase(), score);
        }

        if lexicon.is_empty() {
            return Err(load_err("no entries found".to_string()));
        }

        tracing::debug!(
            origin,
            entries = lexicon.len(),
            phrases_skipped = phrases,
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    fn insert(&mut self, word: String, score: i32) {
        match self.scores.entry(word) {
            Entry::Occupied(mut e) => {
                tracing::debug!(word = %e.key(), old = *e.get(), new = score, "duplicate lexicon entry");
                e.insert(score);
            }
            Entry::Vacant(e) => {
                self.order.push(e.key().clone());
                e.insert(score);
            }
        }
    }

    /// Score of an exact (already lowercase) word.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<i32> {
        self.scores.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Index the table by stemmed key.
    ///
    /// When several entries share a stem, the one listed last wins.
    #[must_use]
    pub fn stemmed_index(&self, stemmer: &dyn Stemmer) -> HashMap<String, i32> {
        let mut index = HashMap::with_capacity(self.order.len());
        for word in &self.order {
            if let Some(&score) = self.scores.get(word) {
                index.insert(stemmer.stem(word), score);
            }
        }
        index
    }
}

#[cfg(test)]
#[path = "lexicon_test.rs"]
mod tests;
