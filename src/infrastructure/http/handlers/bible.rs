//! Bible HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::queries::handlers::{
    BookSummary, ChapterPageResponse, ChapterSummary, VerseLocationResponse, VerseTextResponse,
};
use crate::application::{GetChapterPage, GetVerse, ListBooks, ListChapters, LocateVerse};
use crate::infrastructure::http::dto::{
    ApiResponse, ChapterPageRequest, ListChaptersRequest, LocateVerseRequest, VerseRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取所有卷
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BookSummary>>>, ApiError> {
    let result = state.list_books_handler.handle(ListBooks)?;
    Ok(Json(ApiResponse::success(result)))
}

/// 获取某卷的章列表
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ListChaptersRequest>,
) -> Result<Json<ApiResponse<Vec<ChapterSummary>>>, ApiError> {
    let result = state
        .list_chapters_handler
        .handle(ListChapters { book: req.book })?;
    Ok(Json(ApiResponse::success(result)))
}

/// 获取章内一页
pub async fn get_chapter_page(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChapterPageRequest>,
) -> Result<Json<ApiResponse<ChapterPageResponse>>, ApiError> {
    let query = GetChapterPage {
        book: req.book,
        chapter: req.chapter,
        page: req.page,
        page_size: req.page_size,
    };

    let result = state.get_chapter_page_handler.handle(query)?;
    Ok(Json(ApiResponse::success(result)))
}

/// 获取单节经文
pub async fn get_verse(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerseRequest>,
) -> Result<Json<ApiResponse<VerseTextResponse>>, ApiError> {
    let query = GetVerse {
        book: req.book,
        chapter: req.chapter,
        verse: req.verse,
    };

    let result = state.get_verse_handler.handle(query)?;
    Ok(Json(ApiResponse::success(result)))
}

/// 定位经文所在页
pub async fn locate_verse(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LocateVerseRequest>,
) -> Result<Json<ApiResponse<VerseLocationResponse>>, ApiError> {
    let query = LocateVerse {
        book: req.book,
        chapter: req.chapter,
        verse: req.verse,
        page_size: req.page_size,
    };

    let result = state.locate_verse_handler.handle(query)?;
    Ok(Json(ApiResponse::success(result)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::test_support::{get_json, post_json};

    #[tokio::test]
    async fn test_list_books() {
        let body = get_json("/api/bible/books").await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"][0]["name"], "Genesis");
        assert_eq!(body["data"][2]["name"], "John");
        assert_eq!(body["data"][1]["chapter_count"], 1);
    }

    #[tokio::test]
    async fn test_list_chapters_unknown_book() {
        let body = post_json("/api/bible/chapters", json!({"book": "Tobit"})).await;
        assert_eq!(body["errno"], 404);
        assert_eq!(body["error"], "Book not found: Tobit");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_chapter_page() {
        let body = post_json(
            "/api/bible/page",
            json!({"book": "Genesis", "chapter": "1", "page": 2, "page_size": 2}),
        )
        .await;

        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["max_page"], 2);
        assert_eq!(body["data"]["verses"][0]["key"], "5");
        assert_eq!(body["data"]["verses"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chapter_page_defaults_to_first_page() {
        let body = post_json("/api/bible/page", json!({"book": "Psalms", "chapter": "23"})).await;
        assert_eq!(body["data"]["page"], 0);
        assert_eq!(body["data"]["page_size"], 10);
        assert_eq!(body["data"]["verses"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_chapter_page_zero_size_is_bad_request() {
        let body = post_json(
            "/api/bible/page",
            json!({"book": "Genesis", "chapter": "1", "page_size": 0}),
        )
        .await;
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_get_verse() {
        let body = post_json(
            "/api/bible/verse",
            json!({"book": "John", "chapter": "1", "verse": "5"}),
        )
        .await;
        assert_eq!(
            body["data"]["text"],
            "And the light shineth in darkness; and the darkness comprehended it not."
        );

        let body = post_json(
            "/api/bible/verse",
            json!({"book": "John", "chapter": "1", "verse": "2"}),
        )
        .await;
        assert_eq!(body["errno"], 404);
        assert_eq!(body["error"], "Verse not found: John 1:2");
    }

    #[tokio::test]
    async fn test_locate_verse() {
        let body = post_json(
            "/api/bible/locate",
            json!({"book": "Genesis", "chapter": "1", "verse": "4", "page_size": 3}),
        )
        .await;
        assert_eq!(body["data"]["page"], 1);
    }
}
