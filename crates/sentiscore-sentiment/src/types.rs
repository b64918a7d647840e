use serde::Serialize;

/// Sign of an aggregated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// Result of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentiment {
    /// Aggregated score: `total` divided by the tokens left after stopword
    /// removal (unmatched ones included), or the plain sum.
    /// `0.0` when nothing survives stopword removal.
    pub score: f32,
    /// Sum of matched lexicon scores.
    pub total: i64,
    /// Tokens that matched the lexicon.
    pub hits: usize,
    /// Tokens left after stopword removal.
    pub tokens: usize,
    pub label: Polarity,
}

impl Sentiment {
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            total: 0,
            hits: 0,
            tokens: 0,
            label: Polarity::Neutral,
        }
    }
}

/// One filtered token and how it was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenScore {
    pub token: String,
    pub stem: String,
    /// `None` when neither the word nor its stem is in the lexicon.
    pub score: Option<i32>,
}

/// Every intermediate stage of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineTrace {
    pub normalized: String,
    pub tokens: Vec<String>,
    pub filtered: Vec<String>,
    pub scored: Vec<TokenScore>,
    pub sentiment: Sentiment,
}
