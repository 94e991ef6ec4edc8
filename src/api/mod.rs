//! Axum handlers. Thin shells over [`crate::search::SearchIndex`] and
//! [`crate::history::SearchHistory`]; no ranking logic lives here.

pub mod cards;
pub mod history;
pub mod words;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::models::IndexStats;
use crate::state::AppState;

/// All routes, mounted under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/creditcards", get(cards::list_cards))
        .route("/api/creditcards/rank", post(cards::rank_cards))
        .route("/api/creditcards/page-ranking", get(cards::page_ranking))
        .route("/api/creditcards/autocomplete", get(words::autocomplete))
        .route(
            "/api/creditcards/spelling-suggestions",
            get(words::spelling_suggestions),
        )
        .route("/api/creditcards/word-frequency", get(words::word_frequency))
        .route(
            "/api/creditcards/search-history",
            get(history::popular_searches)
                .post(history::record_search)
                .delete(history::clear_history),
        )
        .with_state(state)
}

/// GET /api/health - Index sizes
pub async fn health(State(state): State<AppState>) -> Json<IndexStats> {
    Json(state.index.stats())
}
