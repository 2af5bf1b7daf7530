//! Static Corpus Source - 内存数据源
//!
//! 直接交出构造时传入的 Corpus，用于测试或嵌入式数据

use async_trait::async_trait;

use crate::application::ports::{CorpusSourcePort, LoadError};
use crate::domain::Corpus;

pub struct StaticCorpusSource {
    corpus: Corpus,
}

impl StaticCorpusSource {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    /// 从 JSON 文本创建
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

#[async_trait]
impl CorpusSourcePort for StaticCorpusSource {
    async fn load(&self) -> Result<Corpus, LoadError> {
        Ok(self.corpus.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} books)", self.corpus.books().len())
    }
}
