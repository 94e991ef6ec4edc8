//! # card-search
//!
//! An in-memory search service over a fixed corpus of credit card products,
//! answering prefix autocompletion, spelling suggestions and free-text
//! relevance queries.
//!
//! ## Architecture
//!
//! The corpus is loaded once at startup and every index is built from it in a
//! single pass. After that nothing but the search history counter changes:
//!
//! ```text
//!                      ┌──────────────────┐
//!                      │  corpus (JSON)   │
//!                      └────────┬─────────┘
//!                               │ Vec<Record>
//!            ┌──────────────────┼──────────────────┐
//!            ▼                  ▼                  ▼
//!     ┌─────────────┐   ┌───────────────┐   ┌───────────────┐
//!     │ PrefixIndex │   │ FuzzyMatcher  │   │RelevanceModel │
//!     │   (trie)    │   │ (vocabulary + │   │ (TF-IDF doc   │
//!     │ word tokens │   │  Levenshtein) │   │  vectors)     │
//!     └──────┬──────┘   └───────┬───────┘   └───────┬───────┘
//!            │ autocomplete     │ suggestions       │ cosine rank,
//!            │                  │ word frequency    │ page ranking
//!            └──────────────────┼───────────────────┘
//!                               ▼
//!                      ┌──────────────────┐
//!                      │ SearchIndex      │◄── filters (bank, fee, rate)
//!                      │ (Arc, read-only) │
//!                      └────────┬─────────┘
//!                               ▼
//!                      ┌──────────────────┐
//!                      │   axum handlers  │──► SearchHistory (Mutex)
//!                      └──────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration
//! - [`models`] - `Record` and request/response types
//! - [`corpus`] - JSON corpus loading
//! - [`search::tokenizer`] - Word, letters-only and query tokenization
//! - [`search::trie`] - Prefix tree for autocomplete
//! - [`search::fuzzy`] - Spelling vocabulary and edit distance
//! - [`search::tfidf`] - TF-IDF vectors and cosine ranking
//! - [`search::ranking`] - Attribute filters and occurrence-based page ranking
//! - [`history`] - Thread-safe search term counter
//! - [`api`] - Axum HTTP handlers
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod corpus;
pub mod history;
pub mod models;
pub mod search;
pub mod state;
