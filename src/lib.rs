//! KaiBible - 经文阅读与检索服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Corpus: 书卷 / 章 / 节的有序聚合
//! - VerseIndex: 列表、定位、分页与检索
//!
//! 应用层 (application/):
//! - Ports: CorpusSourcePort（数据源）
//! - Commands: LoadCorpus
//! - Queries: 书卷、章节、分页、单节、定位、检索、分享文本
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件 / HTTP / 内存数据源
//! - HTTP: RESTful API + 静态文件托管

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_fixtures;

pub use config::{load_config, AppConfig};
