use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::models::{RecordSearchRequest, SearchCount};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

/// GET /api/creditcards/search-history - Most popular searches
pub async fn popular_searches(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<Vec<SearchCount>> {
    let limit = params.limit.unwrap_or(state.config.history_limit);
    Json(state.history.popular(limit))
}

/// POST /api/creditcards/search-history - Count a search; blank terms are ignored
pub async fn record_search(
    State(state): State<AppState>,
    Json(req): Json<RecordSearchRequest>,
) -> StatusCode {
    if let Some(term) = req.term {
        state.history.record(&term);
    }
    StatusCode::OK
}

/// DELETE /api/creditcards/search-history
pub async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.history.clear();
    tracing::info!("Search history cleared");
    StatusCode::NO_CONTENT
}
