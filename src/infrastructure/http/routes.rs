//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/bible/books       GET   列出所有卷
//! - /api/bible/chapters    POST  列出某卷的章
//! - /api/bible/page        POST  获取章内一页
//! - /api/bible/verse       POST  获取单节经文
//! - /api/bible/locate      POST  定位经文所在页
//! - /api/search            POST  全文检索
//! - /api/passage/format    POST  生成分享文本

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/bible", bible_routes())
        .route("/search", post(handlers::search))
        .route("/passage/format", post(handlers::format_passage))
}

/// Bible 路由
fn bible_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(handlers::list_books))
        .route("/chapters", post(handlers::list_chapters))
        .route("/page", post(handlers::get_chapter_page))
        .route("/verse", post(handlers::get_verse))
        .route("/locate", post(handlers::locate_verse))
}
