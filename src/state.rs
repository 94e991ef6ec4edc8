use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::corpus;
use crate::history::SearchHistory;
use crate::search::SearchIndex;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub index: Arc<SearchIndex>,
    pub history: Arc<SearchHistory>,
}

impl AppState {
    /// Load the corpus named by `config` and build the search index.
    pub fn new(config: Config) -> Result<Self> {
        let records = corpus::load(&config.corpus_path)?;
        let index = SearchIndex::build(records).context("Failed to build search index")?;
        Ok(Self::with_index(config, index))
    }

    pub fn with_index(config: Config, index: SearchIndex) -> Self {
        Self {
            config,
            index: Arc::new(index),
            history: Arc::new(SearchHistory::new()),
        }
    }
}
