//! Corpus Command Handlers

use std::sync::Arc;

use crate::application::commands::LoadCorpus;
use crate::application::error::ApplicationError;
use crate::application::ports::{CorpusSourcePort, LoadError};
use crate::domain::VerseIndex;

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadCorpusResponse {
    pub index: Arc<VerseIndex>,
    pub books: usize,
    pub chapters: usize,
    pub verses: usize,
}

/// LoadCorpus Handler
///
/// 从数据源取回 Corpus 并构建 VerseIndex；两种结果二选一，
/// 失败时不会产生部分可用的索引
pub struct LoadCorpusHandler {
    source: Arc<dyn CorpusSourcePort>,
}

impl LoadCorpusHandler {
    pub fn new(source: Arc<dyn CorpusSourcePort>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, _command: LoadCorpus) -> Result<LoadCorpusResponse, ApplicationError> {
        let description = self.source.describe();
        tracing::info!(source = %description, "Loading corpus");

        let corpus = self.source.load().await.map_err(|e| {
            tracing::error!(source = %description, error = %e, "Failed to load corpus");
            e
        })?;

        let books = corpus.books().len();
        let chapters = corpus.chapter_count();
        let verses = corpus.verse_count();

        let index = VerseIndex::new(corpus).map_err(|e| {
            tracing::error!(source = %description, error = %e, "Corpus rejected");
            LoadError::Invalid(e.to_string())
        })?;

        tracing::info!(
            source = %description,
            books,
            chapters,
            verses,
            "Corpus loaded"
        );

        Ok(LoadCorpusResponse {
            index: Arc::new(index),
            books,
            chapters,
            verses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::Corpus;

    struct JsonSource(&'static str);

    #[async_trait]
    impl CorpusSourcePort for JsonSource {
        async fn load(&self) -> Result<Corpus, LoadError> {
            Ok(serde_json::from_str(self.0)?)
        }

        fn describe(&self) -> String {
            "json".to_string()
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CorpusSourcePort for FailingSource {
        async fn load(&self) -> Result<Corpus, LoadError> {
            Err(LoadError::Timeout)
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_builds_index() {
        let handler = LoadCorpusHandler::new(Arc::new(JsonSource(
            r#"{"Gen": {"1": {"1": "a", "2": "b"}, "2": {"1": "c"}}, "Exod": {"1": {"1": "d"}}}"#,
        )));

        let loaded = handler.handle(LoadCorpus).await.unwrap();
        assert_eq!(loaded.books, 2);
        assert_eq!(loaded.chapters, 3);
        assert_eq!(loaded.verses, 4);
        assert_eq!(loaded.index.list_books(), vec!["Gen", "Exod"]);
    }

    #[tokio::test]
    async fn test_load_rejects_empty_corpus() {
        let handler = LoadCorpusHandler::new(Arc::new(JsonSource(r#"{"Gen": {}}"#)));
        let err = handler.handle(LoadCorpus).await.unwrap_err();
        assert!(matches!(err, ApplicationError::LoadError(_)));
        assert!(err.to_string().contains("Gen"));
    }

    #[tokio::test]
    async fn test_load_propagates_source_failure() {
        let handler = LoadCorpusHandler::new(Arc::new(FailingSource));
        let err = handler.handle(LoadCorpus).await.unwrap_err();
        assert_eq!(err.to_string(), "Load error: Request timeout");
    }
}
