//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::LoadError;
use crate::domain::CorpusError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {key}")]
    NotFound {
        resource_type: &'static str,
        key: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 数据加载错误
    #[error("Load error: {0}")]
    LoadError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            key: key.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<CorpusError> for ApplicationError {
    fn from(err: CorpusError) -> Self {
        match err {
            CorpusError::InvalidCorpus(reason) => Self::LoadError(reason),
            CorpusError::UnknownBook { book } => Self::not_found("Book", book),
            CorpusError::UnknownChapter { book, chapter } => {
                Self::not_found("Chapter", format!("{} {}", book, chapter))
            }
            CorpusError::UnknownVerse {
                book,
                chapter,
                verse,
            } => Self::not_found("Verse", format!("{} {}:{}", book, chapter, verse)),
        }
    }
}

impl From<LoadError> for ApplicationError {
    fn from(err: LoadError) -> Self {
        Self::LoadError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_map_to_not_found() {
        let err = ApplicationError::from(CorpusError::unknown_verse("John", "3", "99"));
        assert_eq!(err.to_string(), "Verse not found: John 3:99");

        let err = ApplicationError::from(CorpusError::unknown_chapter("John", "30"));
        assert_eq!(err.to_string(), "Chapter not found: John 30");

        let err = ApplicationError::from(CorpusError::unknown_book("Jhn"));
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Book", .. }));
    }

    #[test]
    fn test_invalid_corpus_maps_to_load_error() {
        let err = ApplicationError::from(CorpusError::invalid("corpus contains no books"));
        assert!(matches!(err, ApplicationError::LoadError(_)));
    }
}
