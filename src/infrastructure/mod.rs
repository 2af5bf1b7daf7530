//! Infrastructure Layer - 基础设施层
//!
//! - adapters: CorpusSourcePort 的具体实现（文件 / HTTP / 内存）
//! - http: RESTful API 与前端静态文件托管

pub mod adapters;
pub mod http;

pub use adapters::{FileCorpusSource, HttpCorpusSource, HttpCorpusSourceConfig, StaticCorpusSource};
