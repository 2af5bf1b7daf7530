//! Ping Handler
//!
//! 健康检查，同时返回已加载的卷数

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub books: usize,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books: state.index.corpus().books().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::get_json;

    #[tokio::test]
    async fn test_ping() {
        let body = get_json("/api/ping").await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["books"], 3);
    }
}
