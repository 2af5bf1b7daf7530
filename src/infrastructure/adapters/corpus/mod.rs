//! Corpus Source Adapters
//!
//! CorpusSourcePort 的三种实现：
//! - FileCorpusSource: 本地 JSON 文件
//! - HttpCorpusSource: 远程 JSON（带超时与重试）
//! - StaticCorpusSource: 内存中的 Corpus

mod file_corpus_source;
mod http_corpus_source;
mod static_corpus_source;

pub use file_corpus_source::FileCorpusSource;
pub use http_corpus_source::{HttpCorpusSource, HttpCorpusSourceConfig};
pub use static_corpus_source::StaticCorpusSource;
