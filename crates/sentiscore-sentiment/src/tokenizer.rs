//! Word tokenization.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid word regex"));

/// Splits text into an ordered sequence of word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Tokens are maximal runs of ASCII letters, digits and underscores.
///
/// Everything else acts as a separator, so empty tokens never appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        WORD.find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            WordTokenizer.tokenize("This is great"),
            vec!["This", "is", "great"]
        );
    }

    #[test]
    fn collapses_repeated_separators() {
        assert_eq!(
            WordTokenizer.tokenize("  lots \t of\n\nspace  "),
            vec!["lots", "of", "space"]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize(" \t\n").is_empty());
    }

    #[test]
    fn punctuation_separates_words_in_raw_text() {
        assert_eq!(
            WordTokenizer.tokenize("good,bad;ugly"),
            vec!["good", "bad", "ugly"]
        );
    }

    #[test]
    fn keeps_case() {
        assert_eq!(WordTokenizer.tokenize("HATE Love"), vec!["HATE", "Love"]);
    }
}
