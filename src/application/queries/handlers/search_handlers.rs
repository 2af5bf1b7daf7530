//! Search Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{ReadingOptions, SearchVerses};
use crate::domain::{SearchHit, SearchMode, VerseIndex};

/// 检索命中
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHitResponse {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    pub text: String,
}

impl From<SearchHit<'_>> for SearchHitResponse {
    fn from(hit: SearchHit<'_>) -> Self {
        Self {
            book: hit.book.to_string(),
            chapter: hit.chapter.to_string(),
            verse: hit.verse.to_string(),
            text: hit.text.to_string(),
        }
    }
}

/// 检索结果
///
/// `truncated` 表示命中数超过 `limit`，只返回了前 `limit` 条
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub mode: SearchMode,
    pub limit: usize,
    pub truncated: bool,
    pub hits: Vec<SearchHitResponse>,
}

/// SearchVerses Handler
pub struct SearchVersesHandler {
    index: Arc<VerseIndex>,
    options: ReadingOptions,
}

impl SearchVersesHandler {
    pub fn new(index: Arc<VerseIndex>, options: ReadingOptions) -> Self {
        Self { index, options }
    }

    pub fn handle(&self, query: SearchVerses) -> Result<SearchResponse, ApplicationError> {
        let limit = self.options.resolve_search_limit(query.limit)?;

        // 多取一条用于判断是否被截断
        let mut hits: Vec<SearchHitResponse> = self
            .index
            .search(&query.query, query.mode)
            .take(limit.saturating_add(1))
            .map(SearchHitResponse::from)
            .collect();

        let truncated = hits.len() > limit;
        hits.truncate(limit);

        tracing::debug!(
            query = %query.query,
            mode = %query.mode,
            hits = hits.len(),
            truncated,
            "Search completed"
        );

        Ok(SearchResponse {
            query: query.query,
            mode: query.mode,
            limit,
            truncated,
            hits,
        })
    }
}
