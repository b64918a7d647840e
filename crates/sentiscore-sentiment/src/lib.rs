//! Lexicon-based English sentiment scoring.
//!
//! Text is stripped to ASCII letters and whitespace, tokenized, filtered for
//! stopwords, stemmed, and scored against an AFINN-style valence table. The
//! tokenizer, stopword filter, stemmer and lexicon are all swappable through
//! [`SentimentAnalyzer::builder`].

pub mod analyzer;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod types;

pub use analyzer::{get_sentiment, SentimentAnalyzer, SentimentAnalyzerBuilder};
pub use error::SentimentError;
pub use lexicon::Lexicon;
pub use normalize::normalize;
pub use sentiscore_core::Aggregation;
pub use stemmer::{PorterStemmer, Stemmer};
pub use stopwords::{StopwordFilter, StopwordList};
pub use tokenizer::{Tokenizer, WordTokenizer};
pub use types::{PipelineTrace, Polarity, Sentiment, TokenScore};
