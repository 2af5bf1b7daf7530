//! File Corpus Source - 从本地 JSON 文件加载经文

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{CorpusSourcePort, LoadError};
use crate::domain::Corpus;

/// 本地文件数据源
pub struct FileCorpusSource {
    path: PathBuf,
}

impl FileCorpusSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CorpusSourcePort for FileCorpusSource {
    async fn load(&self) -> Result<Corpus, LoadError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            size = content.len(),
            "Read corpus file"
        );

        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bible_data.json");
        std::fs::write(
            &path,
            r#"{"Ruth": {"1": {"1": "Now it came to pass...", "16": "Whither thou goest, I will go."}}}"#,
        )
        .unwrap();

        let source = FileCorpusSource::new(&path);
        let corpus = source.load().await.unwrap();

        assert_eq!(corpus.books().len(), 1);
        assert_eq!(corpus.books()[0].name(), "Ruth");
        assert_eq!(corpus.verse_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let source = FileCorpusSource::new(temp_dir.path().join("missing.json"));

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, r#"{"Ruth": {"1": "#).unwrap();

        let err = FileCorpusSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_describe() {
        let source = FileCorpusSource::new("data/bible_data.json");
        assert_eq!(source.describe(), "file://data/bible_data.json");
    }
}
