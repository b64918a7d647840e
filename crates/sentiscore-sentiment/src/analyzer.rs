//! Lexicon-based sentiment analyzer.
//!
//! Runs normalize → tokenize → stopword removal → stem + lexicon lookup →
//! aggregate. Every stage except normalization is an injected capability.

use std::collections::HashMap;
use std::sync::LazyLock;

use sentiscore_core::{Aggregation, AppConfig};

use crate::error::SentimentError;
use crate::lexicon::Lexicon;
use crate::normalize::normalize;
use crate::stemmer::{PorterStemmer, Stemmer};
use crate::stopwords::{StopwordFilter, StopwordList};
use crate::tokenizer::{Tokenizer, WordTokenizer};
use crate::types::{PipelineTrace, Polarity, Sentiment, TokenScore};

static DEFAULT_ANALYZER: LazyLock<SentimentAnalyzer> = LazyLock::new(|| {
    SentimentAnalyzer::english().expect("bundled lexicon and stopwords are valid")
});

/// Score `text` with the default English analyzer.
///
/// Returns the mean AFINN valence of the non-stopword tokens, `0.0` for
/// content-free input.
#[must_use]
pub fn get_sentiment(text: &str) -> f32 {
    DEFAULT_ANALYZER.score(text)
}

/// Immutable after construction; share it across threads behind an `Arc`.
pub struct SentimentAnalyzer {
    tokenizer: Box<dyn Tokenizer>,
    stopwords: Box<dyn StopwordFilter>,
    stemmer: Box<dyn Stemmer>,
    lexicon: Lexicon,
    stemmed: HashMap<String, i32>,
    aggregation: Aggregation,
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("lexicon_entries", &self.lexicon.len())
            .field("stemmed_entries", &self.stemmed.len())
            .field("aggregation", &self.aggregation)
            .finish_non_exhaustive()
    }
}

impl SentimentAnalyzer {
    /// Bundled AFINN lexicon, bundled English stopwords, Porter stemmer, mean.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Load`] if a bundled resource fails to parse.
    pub fn english() -> Result<Self, SentimentError> {
        Self::builder().build()
    }

    /// Build from application config, loading custom resources where configured.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if a configured file is missing or malformed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        let mut builder = Self::builder().aggregation(config.aggregation);
        if let Some(path) = &config.lexicon_path {
            builder = builder.lexicon(Lexicon::from_path(path)?);
        }
        if let Some(path) = &config.stopwords_path {
            builder = builder.stopwords(StopwordList::from_path(path)?);
        }
        builder.build()
    }

    #[must_use]
    pub fn builder() -> SentimentAnalyzerBuilder {
        SentimentAnalyzerBuilder::default()
    }

    #[must_use]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Aggregated score only.
    #[must_use]
    pub fn score(&self, text: &str) -> f32 {
        self.analyze(text).score
    }

    #[must_use]
    pub fn analyze(&self, text: &str) -> Sentiment {
        self.trace(text).sentiment
    }

    /// Run the pipeline and keep every intermediate stage.
    #[must_use]
    pub fn trace(&self, text: &str) -> PipelineTrace {
        let normalized = normalize(text);
        let tokens = self.tokenizer.tokenize(&normalized);
        let filtered = self.stopwords.filter(tokens.clone());
        let scored: Vec<TokenScore> = filtered.iter().map(|t| self.lookup(t)).collect();
        let sentiment = self.aggregate(&scored);

        tracing::trace!(
            tokens = tokens.len(),
            filtered = filtered.len(),
            hits = sentiment.hits,
            score = sentiment.score,
            "text scored"
        );

        PipelineTrace {
            normalized,
            tokens,
            filtered,
            scored,
            sentiment,
        }
    }

    /// Exact lowercase match first, then the stemmed index.
    fn lookup(&self, token: &str) -> TokenScore {
        let lower = token.to_lowercase();
        let stem = self.stemmer.stem(&lower);
        let score = self
            .lexicon
            .get(&lower)
            .or_else(|| self.stemmed.get(&stem).copied());
        TokenScore {
            token: token.to_string(),
            stem,
            score,
        }
    }

    fn aggregate(&self, scored: &[TokenScore]) -> Sentiment {
        if scored.is_empty() {
            return Sentiment::neutral();
        }

        let total = scored
            .iter()
            .filter_map(|t| t.score)
            .fold(0_i64, |acc, s| acc.saturating_add(i64::from(s)));
        let hits = scored.iter().filter(|t| t.score.is_some()).count();

        #[allow(clippy::cast_precision_loss)]
        let score = match self.aggregation {
            Aggregation::Mean => total as f32 / scored.len() as f32,
            Aggregation::Sum => total as f32,
        };

        Sentiment {
            score,
            total,
            hits,
            tokens: scored.len(),
            label: Polarity::from_score(score),
        }
    }
}

/// Assembles a [`SentimentAnalyzer`]; unset capabilities fall back to the English defaults.
#[derive(Default)]
pub struct SentimentAnalyzerBuilder {
    tokenizer: Option<Box<dyn Tokenizer>>,
    stopwords: Option<Box<dyn StopwordFilter>>,
    stemmer: Option<Box<dyn Stemmer>>,
    lexicon: Option<Lexicon>,
    aggregation: Aggregation,
}

impl SentimentAnalyzerBuilder {
    #[must_use]
    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Some(Box::new(tokenizer));
        self
    }

    #[must_use]
    pub fn stopwords(mut self, stopwords: impl StopwordFilter + 'static) -> Self {
        self.stopwords = Some(Box::new(stopwords));
        self
    }

    #[must_use]
    pub fn stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Some(Box::new(stemmer));
        self
    }

    #[must_use]
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    #[must_use]
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Load any missing defaults and index the lexicon by stem.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Load`] if a bundled default fails to parse.
    pub fn build(self) -> Result<SentimentAnalyzer, SentimentError> {
        let tokenizer: Box<dyn Tokenizer> = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Box::new(WordTokenizer),
        };
        let stopwords: Box<dyn StopwordFilter> = match self.stopwords {
            Some(stopwords) => stopwords,
            None => Box::new(StopwordList::english()?),
        };
        let stemmer: Box<dyn Stemmer> = match self.stemmer {
            Some(stemmer) => stemmer,
            None => Box::new(PorterStemmer::new()),
        };
        let lexicon = match self.lexicon {
            Some(lexicon) => lexicon,
            None => Lexicon::afinn()?,
        };

        let stemmed = lexicon.stemmed_index(&*stemmer);
        tracing::debug!(
            lexicon_entries = lexicon.len(),
            stemmed_entries = stemmed.len(),
            aggregation = %self.aggregation,
            "sentiment analyzer ready"
        );

        Ok(SentimentAnalyzer {
            tokenizer,
            stopwords,
            stemmer,
            lexicon,
            stemmed,
            aggregation: self.aggregation,
        })
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
