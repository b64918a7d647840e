use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the lexicon or stopword resources.
///
/// Analysis itself never fails; these only surface during initialization.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The resource file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource was readable but its contents are unusable.
    #[error("invalid {resource} in {origin}: {reason}")]
    Load {
        resource: &'static str,
        origin: String,
        reason: String,
    },
}
