//! Bible Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{
    GetChapterPage, GetVerse, ListBooks, ListChapters, LocateVerse, ReadingOptions,
};
use crate::domain::VerseIndex;

// ============================================================================
// Response DTOs
// ============================================================================

/// 卷摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub name: String,
    pub chapter_count: usize,
}

/// 章摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterSummary {
    pub key: String,
    pub verse_count: usize,
}

/// 经文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseResponse {
    pub key: String,
    pub text: String,
}

impl From<(&str, &str)> for VerseResponse {
    fn from((key, text): (&str, &str)) -> Self {
        Self {
            key: key.to_string(),
            text: text.to_string(),
        }
    }
}

/// 章内一页
///
/// `page` 超出 `max_page` 时 `verses` 为空
#[derive(Debug, Clone, Serialize)]
pub struct ChapterPageResponse {
    pub book: String,
    pub chapter: String,
    pub page: usize,
    pub page_size: usize,
    pub max_page: usize,
    pub total_verses: usize,
    pub verses: Vec<VerseResponse>,
}

/// 单节经文
#[derive(Debug, Clone, Serialize)]
pub struct VerseTextResponse {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    pub text: String,
}

/// 经文所在页
#[derive(Debug, Clone, Serialize)]
pub struct VerseLocationResponse {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    pub page: usize,
    pub page_size: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListBooks Handler
pub struct ListBooksHandler {
    index: Arc<VerseIndex>,
}

impl ListBooksHandler {
    pub fn new(index: Arc<VerseIndex>) -> Self {
        Self { index }
    }

    pub fn handle(&self, _query: ListBooks) -> Result<Vec<BookSummary>, ApplicationError> {
        self.index
            .list_books()
            .into_iter()
            .map(|name| -> Result<BookSummary, ApplicationError> {
                Ok(BookSummary {
                    name: name.to_string(),
                    chapter_count: self.index.list_chapters(name)?.len(),
                })
            })
            .collect()
    }
}

/// ListChapters Handler
pub struct ListChaptersHandler {
    index: Arc<VerseIndex>,
}

impl ListChaptersHandler {
    pub fn new(index: Arc<VerseIndex>) -> Self {
        Self { index }
    }

    pub fn handle(&self, query: ListChapters) -> Result<Vec<ChapterSummary>, ApplicationError> {
        self.index
            .list_chapters(&query.book)?
            .into_iter()
            .map(|key| -> Result<ChapterSummary, ApplicationError> {
                Ok(ChapterSummary {
                    key: key.to_string(),
                    verse_count: self.index.list_verses(&query.book, key)?.len(),
                })
            })
            .collect()
    }
}

/// GetChapterPage Handler
pub struct GetChapterPageHandler {
    index: Arc<VerseIndex>,
    options: ReadingOptions,
}

impl GetChapterPageHandler {
    pub fn new(index: Arc<VerseIndex>, options: ReadingOptions) -> Self {
        Self { index, options }
    }

    pub fn handle(&self, query: GetChapterPage) -> Result<ChapterPageResponse, ApplicationError> {
        let page_size = self.options.resolve_page_size(query.page_size)?;

        let total_verses = self.index.list_verses(&query.book, &query.chapter)?.len();
        let max_page = self
            .index
            .max_page_index(&query.book, &query.chapter, page_size)?;
        let verses = self
            .index
            .paginate(&query.book, &query.chapter, page_size, query.page)?
            .into_iter()
            .map(VerseResponse::from)
            .collect();

        Ok(ChapterPageResponse {
            book: query.book,
            chapter: query.chapter,
            page: query.page,
            page_size: page_size.get(),
            max_page,
            total_verses,
            verses,
        })
    }
}

/// GetVerse Handler
pub struct GetVerseHandler {
    index: Arc<VerseIndex>,
}

impl GetVerseHandler {
    pub fn new(index: Arc<VerseIndex>) -> Self {
        Self { index }
    }

    pub fn handle(&self, query: GetVerse) -> Result<VerseTextResponse, ApplicationError> {
        let text = self
            .index
            .get_verse(&query.book, &query.chapter, &query.verse)?
            .to_string();

        Ok(VerseTextResponse {
            book: query.book,
            chapter: query.chapter,
            verse: query.verse,
            text,
        })
    }
}

/// LocateVerse Handler
///
/// 按经文在章内的位置计算页号，节号不连续（如 1, 5）时仍然准确
pub struct LocateVerseHandler {
    index: Arc<VerseIndex>,
    options: ReadingOptions,
}

impl LocateVerseHandler {
    pub fn new(index: Arc<VerseIndex>, options: ReadingOptions) -> Self {
        Self { index, options }
    }

    pub fn handle(&self, query: LocateVerse) -> Result<VerseLocationResponse, ApplicationError> {
        let page_size = self.options.resolve_page_size(query.page_size)?;

        let position = self
            .index
            .list_verses(&query.book, &query.chapter)?
            .iter()
            .position(|(key, _)| *key == query.verse)
            .ok_or_else(|| {
                ApplicationError::not_found(
                    "Verse",
                    format!("{} {}:{}", query.book, query.chapter, query.verse),
                )
            })?;

        Ok(VerseLocationResponse {
            book: query.book,
            chapter: query.chapter,
            verse: query.verse,
            page: position / page_size.get(),
            page_size: page_size.get(),
        })
    }
}
