//! Corpus Source Port - 经文数据加载端口
//!
//! 定义经文数据的获取与解析接口，具体实现在 infrastructure/adapters 层
//! （本地文件、HTTP、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Corpus;

/// 数据加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Invalid corpus: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Corpus Source Port
///
/// 一次性产出完整的 Corpus：要么成功，要么返回带类型的失败，不存在部分结果
#[async_trait]
pub trait CorpusSourcePort: Send + Sync {
    /// 获取并解析经文数据
    async fn load(&self) -> Result<Corpus, LoadError>;

    /// 数据源描述（用于日志）
    fn describe(&self) -> String;
}
