//! Text normalization ahead of tokenization.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]+").expect("valid non-alpha regex"));

/// Delete every run of characters that is neither an ASCII letter nor whitespace.
///
/// Removed characters are dropped, not replaced by a space, so words joined by
/// punctuation collapse into one: `"can't"` becomes `"cant"` and
/// `"well-known"` becomes `"wellknown"`.
#[must_use]
pub fn normalize(text: &str) -> String {
    NON_ALPHA.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(normalize("This is great!"), "This is great");
    }

    #[test]
    fn contractions_collapse_instead_of_splitting() {
        assert_eq!(normalize("I can't stand it"), "I cant stand it");
    }

    #[test]
    fn hyphenated_words_merge() {
        assert_eq!(normalize("a well-known fact"), "a wellknown fact");
    }

    #[test]
    fn digits_and_symbols_removed() {
        assert_eq!(normalize("5 stars, $20 & 100%"), " stars   ");
    }

    #[test]
    fn non_ascii_letters_removed() {
        assert_eq!(normalize("café naïve 😀 ok"), "caf nave  ok");
    }

    #[test]
    fn whitespace_preserved() {
        assert_eq!(normalize("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn punctuation_only_becomes_empty() {
        assert_eq!(normalize("?!...,;:"), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in ["", "This is great!", "I can't", "we're #1 :)", "ünïcödé text"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
