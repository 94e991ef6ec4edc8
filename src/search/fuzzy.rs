use std::collections::BTreeMap;

use crate::models::Record;
use crate::search::tokenizer::letter_tokens;

/// Spelling vocabulary: every letters-only token of the indexed fields with
/// its occurrence count.
///
/// Suggestions scan the whole vocabulary, so a lookup costs O(|V|) distance
/// computations (minus the length-difference pruning).
#[derive(Debug, Default)]
pub struct FuzzyMatcher {
    frequencies: BTreeMap<String, usize>,
}

impl FuzzyMatcher {
    pub fn build(records: &[Record]) -> Self {
        let mut frequencies = BTreeMap::new();
        for record in records {
            for field in record.indexed_fields() {
                for word in letter_tokens(field) {
                    *frequencies.entry(word).or_insert(0) += 1;
                }
            }
        }
        Self { frequencies }
    }

    /// Vocabulary words within `max_distance` edits of `word`, closest first
    /// (ties alphabetical), at most `max_suggestions` of them.
    pub fn suggestions(&self, word: &str, max_distance: usize, max_suggestions: usize) -> Vec<String> {
        if max_suggestions == 0 {
            return Vec::new();
        }
        let word = word.to_lowercase();
        let word_len = word.chars().count();

        let mut matches: Vec<(usize, &str)> = self
            .frequencies
            .keys()
            .filter(|candidate| candidate.chars().count().abs_diff(word_len) <= max_distance)
            .filter_map(|candidate| {
                let distance = levenshtein(&word, candidate);
                (distance <= max_distance).then_some((distance, candidate.as_str()))
            })
            .collect();

        // Vocabulary iterates alphabetically, so a stable sort on distance
        // leaves ties in word order.
        matches.sort_by_key(|(distance, _)| *distance);
        matches
            .into_iter()
            .take(max_suggestions)
            .map(|(_, w)| w.to_string())
            .collect()
    }

    /// Occurrences of `word` (case-insensitive) across the indexed fields.
    pub fn word_frequency(&self, word: &str) -> usize {
        self.frequencies.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(&word.to_lowercase())
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.frequencies.keys().map(String::as_str)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.frequencies.len()
    }
}

/// Levenshtein edit distance over Unicode scalar values, two rolling rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Keep the row along the shorter string.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, value_prop: &str, benefits: &str, bank: &str) -> Record {
        Record {
            title: title.to_string(),
            value_prop: value_prop.to_string(),
            benefits: benefits.to_string(),
            bank_name: bank.to_string(),
            ..serde_json::from_str("{}").unwrap()
        }
    }

    fn sample() -> FuzzyMatcher {
        FuzzyMatcher::build(&[
            record("Travel Rewards Card", "Earn travel points", "Lounge access", "Chase"),
            record("Cash Back Card", "Cash back on groceries", "No annual fee", "Chase"),
            record("Student Card", "Build credit", "Cheap start", "TD"),
        ])
    }

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("chase", "chase"), 0);
    }

    #[test]
    fn test_levenshtein_symmetric_and_triangle() {
        let words = ["travel", "travel", "cash", "cask", "chase", "", "rewards"];
        for a in words {
            assert_eq!(levenshtein(a, a), 0);
            for b in words {
                assert_eq!(levenshtein(a, b), levenshtein(b, a));
                for c in words {
                    assert!(levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c));
                }
            }
        }
    }

    #[test]
    fn test_levenshtein_at_least_length_difference() {
        assert!(levenshtein("card", "cards") >= 1);
        assert!(levenshtein("a", "abcd") >= 3);
    }

    #[test]
    fn test_suggestions_within_distance() {
        let matcher = sample();
        let suggestions = matcher.suggestions("travle", 2, 10);
        assert!(suggestions.contains(&"travel".to_string()));
        for s in &suggestions {
            assert!(levenshtein("travle", s) <= 2);
            assert!(matcher.contains(s));
        }
    }

    #[test]
    fn test_suggestions_closest_first() {
        let matcher = sample();
        let suggestions = matcher.suggestions("cash", 2, 3);
        assert_eq!(suggestions[0], "cash");
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn test_suggestions_respect_limit() {
        let matcher = sample();
        assert!(matcher.suggestions("card", 4, 2).len() <= 2);
        assert!(matcher.suggestions("card", 4, 0).is_empty());
    }

    #[test]
    fn test_suggestions_ties_alphabetical() {
        let matcher = FuzzyMatcher::build(&[record("cart", "cars", "care", "")]);
        assert_eq!(matcher.suggestions("card", 1, 3), vec!["care", "cars", "cart"]);
    }

    #[test]
    fn test_suggestions_case_insensitive() {
        let matcher = sample();
        assert_eq!(matcher.suggestions("CHASE", 0, 3), vec!["chase"]);
    }

    #[test]
    fn test_no_suggestions_beyond_distance() {
        let matcher = sample();
        assert!(matcher.suggestions("zzzzzzzzzz", 2, 3).is_empty());
    }

    #[test]
    fn test_word_frequency_counts_all_fields() {
        let matcher = sample();
        assert_eq!(matcher.word_frequency("chase"), 2);
        assert_eq!(matcher.word_frequency("Card"), 3);
        assert_eq!(matcher.word_frequency("cash"), 2);
        assert_eq!(matcher.word_frequency("unknown"), 0);
    }

    #[test]
    fn test_vocabulary_is_letters_only() {
        let matcher = FuzzyMatcher::build(&[record("5x Points", "2% back", "", "")]);
        let vocab: Vec<&str> = matcher.vocabulary().collect();
        assert_eq!(vocab, vec!["back", "points"]);
        assert_eq!(matcher.vocabulary_size(), 2);
    }

    #[test]
    fn test_alphanumeric_words_not_counted() {
        let matcher = FuzzyMatcher::build(&[record("Earn 2x travel points", "", "", "")]);
        assert_eq!(matcher.word_frequency("x"), 0);
        assert_eq!(matcher.word_frequency("travel"), 1);
        assert_eq!(matcher.vocabulary_size(), 3);
    }
}
