//! Text normalization shared by every index.
//!
//! Two token universes coexist: `word_tokens` (ASCII alphanumerics and `_`)
//! feed the TF-IDF model and the prefix index, while `letter_tokens` (ASCII
//! letters only) feed the spelling vocabulary. A letters-only token must be a
//! whole word, so `cash2go` and `5x` add nothing to the vocabulary.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());
static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Za-z]+\b").unwrap());

/// Lowercase runs of alphanumeric or underscore characters.
pub fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_ascii_lowercase())
}

/// Lowercase words made only of ASCII letters. Letter runs glued to digits or
/// underscores are not words.
pub fn letter_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    LETTERS.find_iter(text).map(|m| m.as_str().to_ascii_lowercase())
}

/// Lowercase whitespace-separated terms, punctuation kept. Used for queries.
pub fn query_terms(query: &str) -> impl Iterator<Item = String> + '_ {
    query.split_whitespace().map(str::to_lowercase)
}
