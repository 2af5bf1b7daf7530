//! Search HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::queries::handlers::SearchResponse;
use crate::application::SearchVerses;
use crate::infrastructure::http::dto::{ApiResponse, SearchRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 全文检索
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let query = SearchVerses {
        query: req.query,
        mode: req.mode,
        limit: req.limit,
    };

    let result = state.search_verses_handler.handle(query)?;
    Ok(Json(ApiResponse::success(result)))
}
