//! Corpus Context - Errors

use thiserror::Error;

/// VerseIndex 错误
///
/// 每个变体都带上出错的键，调用方可据此给出准确的"未找到"提示
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("Unknown book: {book}")]
    UnknownBook { book: String },

    #[error("Unknown chapter: {book} {chapter}")]
    UnknownChapter { book: String, chapter: String },

    #[error("Unknown verse: {book} {chapter}:{verse}")]
    UnknownVerse {
        book: String,
        chapter: String,
        verse: String,
    },
}

impl CorpusError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCorpus(reason.into())
    }

    pub fn unknown_book(book: &str) -> Self {
        Self::UnknownBook {
            book: book.to_string(),
        }
    }

    pub fn unknown_chapter(book: &str, chapter: &str) -> Self {
        Self::UnknownChapter {
            book: book.to_string(),
            chapter: chapter.to_string(),
        }
    }

    pub fn unknown_verse(book: &str, chapter: &str, verse: &str) -> Self {
        Self::UnknownVerse {
            book: book.to_string(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        }
    }
}
