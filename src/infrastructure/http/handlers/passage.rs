//! Passage HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::queries::handlers::PassageResponse;
use crate::application::FormatPassage;
use crate::infrastructure::http::dto::{ApiResponse, FormatPassageRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 生成分享文本
pub async fn format_passage(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FormatPassageRequest>,
) -> Result<Json<ApiResponse<PassageResponse>>, ApiError> {
    let query = FormatPassage {
        book: req.book,
        chapter: req.chapter,
        verses: req.verses,
    };

    let result = state.format_passage_handler.handle(query)?;

    tracing::debug!(reference = %result.reference, "Passage formatted");

    Ok(Json(ApiResponse::success(result)))
}
