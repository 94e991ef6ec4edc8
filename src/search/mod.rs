//! In-memory search over the card corpus.
//!
//! Everything here is built once by [`SearchIndex::build`] and read-only
//! afterwards, so a single `Arc<SearchIndex>` can serve any number of
//! concurrent requests without locking.

pub mod fuzzy;
pub mod ranking;
pub mod tfidf;
pub mod tokenizer;
pub mod trie;

use anyhow::{bail, Result};

use crate::models::{CardQuery, IndexStats, RankedSearchResults, Record};
use fuzzy::FuzzyMatcher;
use tfidf::RelevanceModel;
use tokenizer::word_tokens;
use trie::PrefixIndex;

/// The corpus plus the three indexes built over it.
#[derive(Debug)]
pub struct SearchIndex {
    records: Vec<Record>,
    prefixes: PrefixIndex,
    fuzzy: FuzzyMatcher,
    relevance: RelevanceModel,
}

impl SearchIndex {
    /// Build every index from `records`. An empty corpus is an error.
    pub fn build(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            bail!("Cannot build search index from an empty corpus");
        }

        let mut prefixes = PrefixIndex::new();
        for record in &records {
            for field in record.indexed_fields() {
                for token in word_tokens(field) {
                    prefixes.insert(&token);
                }
            }
        }

        let fuzzy = FuzzyMatcher::build(&records);
        let relevance = RelevanceModel::build(&records);

        tracing::info!(
            "Search index built: {} records, {} completions, {} vocabulary words, {} terms",
            records.len(),
            prefixes.len(),
            fuzzy.vocabulary_size(),
            relevance.term_count()
        );

        Ok(Self {
            records,
            prefixes,
            fuzzy,
            relevance,
        })
    }

    /// The corpus, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Indexed words starting with `prefix` (case-insensitive), sorted.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.prefixes.search_prefix(&prefix.to_lowercase())
    }

    pub fn spelling_suggestions(
        &self,
        word: &str,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<String> {
        self.fuzzy.suggestions(word, max_distance, max_suggestions)
    }

    pub fn word_frequency(&self, word: &str) -> usize {
        self.fuzzy.word_frequency(word)
    }

    /// Rank `records` by cosine relevance to `query`. Blank queries are a no-op.
    pub fn rank(&self, records: &[Record], query: &str) -> Vec<Record> {
        self.relevance.rank(records, query)
    }

    /// Cosine-filter the whole corpus by `query`, then re-score the survivors
    /// with the occurrence-based scorer.
    pub fn ranked_search_results(&self, query: &str) -> RankedSearchResults {
        let query = query.trim();
        let candidates = self.rank(&self.records, &query.to_lowercase());
        tracing::debug!("Page ranking '{}' over {} candidates", query, candidates.len());
        ranking::page_rank(&self.relevance, &candidates, query)
    }

    /// Apply the listing filters in order: bank, fee range, interest range,
    /// then relevance ranking when a search term is present. Range filters
    /// only apply when both bounds are given.
    pub fn find_cards(&self, query: &CardQuery) -> Vec<Record> {
        let mut cards = self.records.clone();

        if let Some(bank) = &query.bank_name {
            cards = ranking::by_bank(cards, bank);
        }
        if let (Some(min), Some(max)) = (query.min_fee, query.max_fee) {
            cards = ranking::by_annual_fee(cards, min, max);
        }
        if let (Some(min), Some(max)) = (query.min_interest, query.max_interest) {
            cards = ranking::by_purchase_rate(cards, min, max);
        }
        if let Some(search) = query.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                cards = self.rank(&cards, &search.to_lowercase());
            }
        }

        tracing::debug!("Card listing matched {} of {} records", cards.len(), self.records.len());
        cards
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            vocabulary_size: self.fuzzy.vocabulary_size(),
            terms: self.relevance.term_count(),
            completions: self.prefixes.len(),
        }
    }
}
