use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::Record;
use crate::search::tokenizer::{query_terms, word_tokens};

/// TF-IDF weights of one record, with the Euclidean norm precomputed.
#[derive(Debug, Clone, Default)]
pub struct DocumentVector {
    pub weights: HashMap<String, f64>,
    pub norm: f64,
}

/// A query projected into the corpus term space.
#[derive(Debug, Clone, Default)]
pub struct QueryVector {
    pub weights: HashMap<String, f64>,
    pub norm: f64,
}

/// Vector-space relevance model built once over the whole corpus.
///
/// Documents are identified by their position in the corpus. Candidates passed
/// to [`RelevanceModel::rank`] are matched back to documents by value; a record
/// the model never saw is skipped. Two identical records carry identical
/// vectors, so value lookup loses nothing.
#[derive(Debug, Default)]
pub struct RelevanceModel {
    documents: Vec<DocumentVector>,
    positions: HashMap<Record, usize>,
    doc_freq: HashMap<String, usize>,
    idf: HashMap<String, f64>,
}

impl RelevanceModel {
    pub fn build(records: &[Record]) -> Self {
        let term_freqs: Vec<HashMap<String, usize>> = records
            .iter()
            .map(|r| term_frequencies(&r.searchable_text()))
            .collect();

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for tf in &term_freqs {
            for term in tf.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let total = records.len() as f64;
        // df >= 1 for every key here, so the ratio is finite and >= 1.
        let idf: HashMap<String, f64> = doc_freq
            .iter()
            .map(|(term, &df)| (term.clone(), (total / df as f64).ln()))
            .collect();

        let documents = term_freqs
            .into_iter()
            .map(|tf| {
                let weights: HashMap<String, f64> = tf
                    .into_iter()
                    .map(|(term, count)| {
                        let w = count as f64 * idf.get(&term).copied().unwrap_or(0.0);
                        (term, w)
                    })
                    .collect();
                let norm = euclidean_norm(weights.values());
                DocumentVector { weights, norm }
            })
            .collect();

        let mut positions = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            positions.entry(record.clone()).or_insert(i);
        }

        Self {
            documents,
            positions,
            doc_freq,
            idf,
        }
    }

    /// `ln(N / df)`; zero for terms outside the corpus.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// Number of documents containing `term` as a word token.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn term_count(&self) -> usize {
        self.idf.len()
    }

    /// Corpus position of `record`, if it was part of the build.
    pub fn position(&self, record: &Record) -> Option<usize> {
        self.positions.get(record).copied()
    }

    pub fn document(&self, position: usize) -> Option<&DocumentVector> {
        self.documents.get(position)
    }

    /// Whitespace-split, lowercased query weighted by corpus idf.
    pub fn query_vector(&self, query: &str) -> QueryVector {
        let mut tf: HashMap<String, usize> = HashMap::new();
        for term in query_terms(query) {
            *tf.entry(term).or_insert(0) += 1;
        }
        let weights: HashMap<String, f64> = tf
            .into_iter()
            .map(|(term, count)| {
                let w = count as f64 * self.idf(&term);
                (term, w)
            })
            .collect();
        let norm = euclidean_norm(weights.values());
        QueryVector { weights, norm }
    }

    /// Cosine similarity between a document and a query, 0 when either
    /// vector has no weight.
    pub fn cosine(&self, doc: &DocumentVector, query: &QueryVector) -> f64 {
        if doc.norm <= 0.0 || query.norm <= 0.0 {
            return 0.0;
        }
        let dot: f64 = query
            .weights
            .iter()
            .filter_map(|(term, qw)| doc.weights.get(term).map(|dw| dw * qw))
            .sum();
        dot / (doc.norm * query.norm)
    }

    /// Similarity of `record` to `query`, or `None` for records outside the
    /// model.
    #[cfg(test)]
    fn score(&self, record: &Record, query: &str) -> Option<f64> {
        let doc = self.document(self.position(record)?)?;
        Some(self.cosine(doc, &self.query_vector(query)))
    }

    /// Candidates with positive similarity, most similar first. Ties keep
    /// corpus order.
    pub fn scored<'a>(&self, records: &'a [Record], query: &str) -> Vec<(&'a Record, f64)> {
        let query = self.query_vector(query);

        let mut scored: Vec<(&Record, usize, f64)> = records
            .iter()
            .filter_map(|record| {
                let pos = self.position(record)?;
                let similarity = self.cosine(&self.documents[pos], &query);
                (similarity > 0.0).then_some((record, pos, similarity))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        scored.into_iter().map(|(r, _, s)| (r, s)).collect()
    }

    /// Order `records` by cosine similarity to `query`, dropping those with
    /// no similarity. A blank query returns the input untouched.
    pub fn rank(&self, records: &[Record], query: &str) -> Vec<Record> {
        if query.trim().is_empty() {
            return records.to_vec();
        }
        self.scored(records, query)
            .into_iter()
            .map(|(r, _)| r.clone())
            .collect()
    }
}

fn term_frequencies(text: &str) -> HashMap<String, usize> {
    let mut tf = HashMap::new();
    for term in word_tokens(text) {
        *tf.entry(term).or_insert(0) += 1;
    }
    tf
}

fn euclidean_norm<'a>(weights: impl Iterator<Item = &'a f64>) -> f64 {
    weights.map(|w| w * w).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, bank: &str) -> Record {
        Record {
            title: title.to_string(),
            bank_name: bank.to_string(),
            ..serde_json::from_str("{}").unwrap()
        }
    }

    fn corpus() -> Vec<Record> {
        vec![
            card("Travel Rewards Card", "Chase"),
            card("Cash Back Card", "Chase"),
            card("Student Card", "TD"),
        ]
    }

    #[test]
    fn test_idf_values() {
        let model = RelevanceModel::build(&corpus());
        // "card" appears everywhere
        assert_eq!(model.idf("card"), 0.0);
        assert!((model.idf("chase") - (3.0f64 / 2.0).ln()).abs() < 1e-12);
        assert!((model.idf("travel") - 3.0f64.ln()).abs() < 1e-12);
        assert_eq!(model.idf("missing"), 0.0);
    }

    #[test]
    fn test_idf_non_negative_and_zero_iff_universal() {
        let records = corpus();
        let model = RelevanceModel::build(&records);
        for term in ["travel", "rewards", "card", "cash", "back", "chase", "student", "td"] {
            let idf = model.idf(term);
            assert!(idf >= 0.0);
            assert_eq!(idf == 0.0, model.document_frequency(term) == records.len());
        }
    }

    #[test]
    fn test_document_norm_matches_weights() {
        let model = RelevanceModel::build(&corpus());
        let doc = model.document(0).unwrap();
        let expected = doc.weights.values().map(|w| w * w).sum::<f64>().sqrt();
        assert!((doc.norm - expected).abs() < 1e-12);
        assert!(doc.norm > 0.0);
    }

    #[test]
    fn test_travel_rewards_ranks_first() {
        let records = vec![
            card("Travel Rewards Card", "Chase"),
            card("Cash Back Card", "Chase"),
        ];
        let model = RelevanceModel::build(&records);
        let scored = model.scored(&records, "travel rewards");
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].0.title, "Travel Rewards Card");
        assert!(scored[0].1 > 0.0);
        assert_eq!(model.score(&records[1], "travel rewards"), Some(0.0));
    }

    #[test]
    fn test_similarity_in_unit_range() {
        let records = corpus();
        let model = RelevanceModel::build(&records);
        for query in ["travel", "cash back", "student td chase", "card card", "nothing"] {
            for record in &records {
                let s = model.score(record, query).unwrap();
                assert!((0.0..=1.0 + 1e-12).contains(&s), "{query}: {s}");
            }
        }
    }

    #[test]
    fn test_blank_query_returns_input() {
        let records = corpus();
        let model = RelevanceModel::build(&records);
        assert_eq!(model.rank(&records, ""), records);
        assert_eq!(model.rank(&records, "   "), records);
    }

    #[test]
    fn test_unknown_record_is_skipped() {
        let records = corpus();
        let model = RelevanceModel::build(&records);
        let outsider = card("Travel Outsider", "Nobody");
        let candidates = vec![outsider.clone(), records[0].clone()];
        let ranked = model.rank(&candidates, "travel");
        assert_eq!(ranked, vec![records[0].clone()]);
        assert_eq!(model.score(&outsider, "travel"), None);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let mut first = card("Gold Card", "Amex");
        first.link = "https://a.example".to_string();
        let mut second = card("Gold Card", "Amex");
        second.link = "https://b.example".to_string();
        let records = vec![first, card("Platinum Card", "Amex"), second];
        let model = RelevanceModel::build(&records);

        // Same text, same vector. Candidates arrive reversed; ties follow
        // corpus order.
        let candidates = vec![records[2].clone(), records[0].clone()];
        let scored = model.scored(&candidates, "gold");
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].1, scored[1].1);
        assert_eq!(scored[0].0.link, "https://a.example");
        assert_eq!(scored[1].0.link, "https://b.example");
    }

    #[test]
    fn test_query_terms_are_whitespace_split() {
        let records = corpus();
        let model = RelevanceModel::build(&records);
        // Punctuation is not stripped from query terms.
        assert!(model.rank(&records, "travel,").is_empty());
        assert_eq!(model.rank(&records, "TRAVEL").len(), 1);
    }
}
