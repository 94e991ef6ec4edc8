use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the card corpus
    pub corpus_path: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Largest edit distance accepted for spelling suggestions
    pub max_edit_distance: usize,
    /// Number of spelling suggestions returned
    pub max_suggestions: usize,
    /// Default number of entries returned by the search history endpoint
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("./data/credit_cards.json"),
            bind_addr: "127.0.0.1:8080".to_string(),
            max_edit_distance: 2,
            max_suggestions: 3,
            history_limit: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("CARD_SEARCH_CORPUS_PATH") {
            config.corpus_path = PathBuf::from(path);
        }
        if let Ok(addr) = std::env::var("CARD_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(val) = std::env::var("CARD_SEARCH_MAX_EDIT_DISTANCE") {
            if let Ok(v) = val.parse() {
                config.max_edit_distance = v;
            }
        }
        if let Ok(val) = std::env::var("CARD_SEARCH_MAX_SUGGESTIONS") {
            if let Ok(v) = val.parse() {
                config.max_suggestions = v;
            }
        }
        if let Ok(val) = std::env::var("CARD_SEARCH_HISTORY_LIMIT") {
            if let Ok(v) = val.parse() {
                config.history_limit = v;
            }
        }

        config
    }
}
