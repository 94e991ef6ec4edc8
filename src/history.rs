use parking_lot::Mutex;
use std::collections::HashMap;

use crate::models::SearchCount;

/// Counts how often each search term was submitted.
///
/// The only mutable state shared between requests. Terms are normalized to
/// trimmed lowercase before counting.
#[derive(Debug, Default)]
pub struct SearchHistory {
    counts: Mutex<HashMap<String, u64>>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one search for `term`. Blank terms are ignored.
    pub fn record(&self, term: &str) {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return;
        }
        *self.counts.lock().entry(term).or_insert(0) += 1;
    }

    /// The `limit` most searched terms, most frequent first, ties by term.
    pub fn popular(&self, limit: usize) -> Vec<SearchCount> {
        let mut entries: Vec<SearchCount> = self
            .counts
            .lock()
            .iter()
            .map(|(term, &count)| SearchCount {
                term: term.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        entries.truncate(limit);
        entries
    }

    pub fn count(&self, term: &str) -> u64 {
        self.counts
            .lock()
            .get(&term.trim().to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn clear(&self) {
        self.counts.lock().clear();
    }
}
