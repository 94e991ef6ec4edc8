use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::models::{CardQuery, RankedSearchResults, Record};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageRankingParams {
    pub term: String,
}

/// GET /api/creditcards - Filter by bank, fee and interest range, then rank
/// by relevance when `search` is given
pub async fn list_cards(
    State(state): State<AppState>,
    Query(query): Query<CardQuery>,
) -> Json<Vec<Record>> {
    if let Some(search) = &query.search {
        state.history.record(search);
    }
    Json(state.index.find_cards(&query))
}

/// POST /api/creditcards/rank - Rank a caller-supplied card list. No query
/// is involved, so the list comes back in its original order.
pub async fn rank_cards(
    State(state): State<AppState>,
    Json(cards): Json<Vec<Record>>,
) -> Json<Vec<Record>> {
    Json(state.index.rank(&cards, ""))
}

/// GET /api/creditcards/page-ranking - Occurrence-scored results for a term
pub async fn page_ranking(
    State(state): State<AppState>,
    Query(params): Query<PageRankingParams>,
) -> Result<Json<RankedSearchResults>, (StatusCode, String)> {
    let term = params.term.trim();
    if term.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Search term is required".to_string()));
    }

    state.history.record(term);
    let results = state.index.ranked_search_results(term);
    tracing::info!("Page ranking for '{}': {} results", term, results.results.len());
    Ok(Json(results))
}
