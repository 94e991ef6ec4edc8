//! Attribute filters and the occurrence-based "page ranking" scorer.
//!
//! Filters never fail: a record whose numeric field does not parse is logged
//! and left out of the range-filtered set.

use std::cmp::Ordering;

use crate::models::{RankedCard, RankedSearchResults, Record};
use crate::search::tfidf::RelevanceModel;

/// Records whose bank matches `bank` (trimmed, case-insensitive).
pub fn by_bank(records: Vec<Record>, bank: &str) -> Vec<Record> {
    let bank = bank.trim().to_lowercase();
    records
        .into_iter()
        .filter(|r| r.bank_name.trim().to_lowercase() == bank)
        .collect()
}

/// Records with an annual fee in `[min, max]`.
pub fn by_annual_fee(records: Vec<Record>, min: f64, max: f64) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| match r.annual_fee_amount() {
            Ok(fee) => fee >= min && fee <= max,
            Err(e) => {
                tracing::warn!("Skipping '{}': invalid annual fee '{}': {e}", r.title, r.annual_fee);
                false
            }
        })
        .collect()
}

/// Records with a purchase rate, in percent, in `[min, max]`.
pub fn by_purchase_rate(records: Vec<Record>, min: f64, max: f64) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| match r.purchase_rate_percent() {
            Ok(rate) => rate >= min && rate <= max,
            Err(e) => {
                tracing::warn!(
                    "Skipping '{}': invalid purchase interest rate '{}': {e}",
                    r.title,
                    r.purchase_rate
                );
                false
            }
        })
        .collect()
}

/// Score `candidates` by literal occurrences of each query term.
///
/// For every whitespace-separated query term the lowercased searchable text is
/// scanned for non-overlapping substring matches (so `trav` counts inside
/// `travel`). Each matched term adds `occurrences / text_token_count * idf`,
/// where idf uses the corpus document frequency of the term as a word token.
/// A term that only ever occurs inside longer words has no document
/// frequency and contributes nothing to the score, though its occurrences are
/// still reported. An unbounded `ln(N / 0)` weight would instead sort such
/// cards first and cannot be carried in JSON, so ordering differs from a
/// scorer that lets that weight through.
pub fn page_rank(model: &RelevanceModel, candidates: &[Record], query: &str) -> RankedSearchResults {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    let total = model.document_count() as f64;

    let mut scored: Vec<(&Record, f64, usize)> = candidates
        .iter()
        .map(|record| {
            let content = record.searchable_text().to_lowercase();
            let token_count = content.split_whitespace().count().max(1) as f64;

            let mut score = 0.0;
            let mut occurrences = 0;
            for term in &terms {
                let count = content.matches(term.as_str()).count();
                occurrences += count;
                let df = model.document_frequency(term);
                if count > 0 && df > 0 {
                    let tf = count as f64 / token_count;
                    score += tf * (total / df as f64).ln();
                }
            }
            (record, score, occurrences)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    RankedSearchResults {
        search_term: query.to_string(),
        results: scored
            .into_iter()
            .map(|(record, relevance, occurrences)| RankedCard {
                title: record.title.clone(),
                bank: record.bank_name.clone(),
                url: record.link.clone(),
                relevance,
                occurrences,
            })
            .collect(),
    }
}
