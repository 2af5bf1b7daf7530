//! Application State
//!
//! 所有 Query Handler 共享同一个只读 VerseIndex

use std::sync::Arc;

use crate::application::{
    FormatPassageHandler, GetChapterPageHandler, GetVerseHandler, ListBooksHandler,
    ListChaptersHandler, LocateVerseHandler, ReadingOptions, SearchVersesHandler,
};
use crate::domain::VerseIndex;

/// 应用状态
pub struct AppState {
    pub index: Arc<VerseIndex>,

    // ========== Query Handlers ==========
    pub list_books_handler: ListBooksHandler,
    pub list_chapters_handler: ListChaptersHandler,
    pub get_chapter_page_handler: GetChapterPageHandler,
    pub get_verse_handler: GetVerseHandler,
    pub locate_verse_handler: LocateVerseHandler,
    pub search_verses_handler: SearchVersesHandler,
    pub format_passage_handler: FormatPassageHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(index: Arc<VerseIndex>, options: ReadingOptions) -> Self {
        Self {
            index: index.clone(),

            list_books_handler: ListBooksHandler::new(index.clone()),
            list_chapters_handler: ListChaptersHandler::new(index.clone()),
            get_chapter_page_handler: GetChapterPageHandler::new(index.clone(), options),
            get_verse_handler: GetVerseHandler::new(index.clone()),
            locate_verse_handler: LocateVerseHandler::new(index.clone(), options),
            search_verses_handler: SearchVersesHandler::new(index.clone(), options),
            format_passage_handler: FormatPassageHandler::new(index),
        }
    }
}
