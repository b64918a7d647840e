//! Suffix-stripping stemmers.

use rust_stemmers::Algorithm;

/// Reduces a word to its root form. Must be deterministic and stateless.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// English Porter-family stemmer backed by `rust-stemmers`.
///
/// Input is lowercased first; the underlying algorithm only handles lowercase.
pub struct PorterStemmer {
    inner: rust_stemmers::Stemmer,
}

impl PorterStemmer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorterStemmer").finish_non_exhaustive()
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_common_suffixes() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("loved"), "love");
        assert_eq!(stemmer.stem("hates"), "hate");
    }

    #[test]
    fn roots_are_stable() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("great"), "great");
        assert_eq!(stemmer.stem("hate"), "hate");
    }

    #[test]
    fn lowercases_before_stemming() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("Running"), stemmer.stem("running"));
    }

    #[test]
    fn empty_word_stems_to_empty() {
        assert_eq!(PorterStemmer::new().stem(""), "");
    }
}
