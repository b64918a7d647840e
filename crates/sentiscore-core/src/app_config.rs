use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How per-token lexicon scores collapse into one result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Sum of matched scores divided by the number of tokens left after
    /// stopword removal, unmatched ones included.
    #[default]
    Mean,
    /// Plain sum of matched scores.
    Sum,
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Aggregation::Mean => write!(f, "mean"),
            Aggregation::Sum => write!(f, "sum"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub lexicon_path: Option<PathBuf>,
    pub stopwords_path: Option<PathBuf>,
    pub aggregation: Aggregation,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "lexicon_path",
                &self
                    .lexicon_path
                    .as_ref()
                    .map_or("[bundled afinn]".into(), |p| p.display().to_string()),
            )
            .field(
                "stopwords_path",
                &self
                    .stopwords_path
                    .as_ref()
                    .map_or("[bundled english]".into(), |p| p.display().to_string()),
            )
            .field("aggregation", &self.aggregation)
            .finish()
    }
}
