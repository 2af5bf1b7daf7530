//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::SearchMode;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Bible DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListChaptersRequest {
    pub book: String,
}

#[derive(Debug, Deserialize)]
pub struct ChapterPageRequest {
    pub book: String,
    pub chapter: String,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct VerseRequest {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

#[derive(Debug, Deserialize)]
pub struct LocateVerseRequest {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    #[serde(default)]
    pub page_size: Option<usize>,
}

// ============================================================================
// Search DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default)]
    pub limit: Option<usize>,
}

// ============================================================================
// Passage DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FormatPassageRequest {
    pub book: String,
    pub chapter: String,
    pub verses: Vec<String>,
}
