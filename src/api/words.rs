use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::WordFrequency;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PrefixParams {
    pub prefix: String,
}

#[derive(Debug, Deserialize)]
pub struct WordParams {
    pub word: String,
}

/// GET /api/creditcards/autocomplete
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<PrefixParams>,
) -> Json<Vec<String>> {
    Json(state.index.autocomplete(&params.prefix))
}

/// GET /api/creditcards/spelling-suggestions
pub async fn spelling_suggestions(
    State(state): State<AppState>,
    Query(params): Query<WordParams>,
) -> Json<Vec<String>> {
    let suggestions = state.index.spelling_suggestions(
        &params.word,
        state.config.max_edit_distance,
        state.config.max_suggestions,
    );
    tracing::debug!("Suggestions for '{}': {:?}", params.word, suggestions);
    Json(suggestions)
}

/// GET /api/creditcards/word-frequency
pub async fn word_frequency(
    State(state): State<AppState>,
    Query(params): Query<WordParams>,
) -> Json<WordFrequency> {
    let count = state.index.word_frequency(&params.word);
    Json(WordFrequency {
        word: params.word,
        count,
    })
}
