//! Corpus Context - 经文数据限界上下文
//!
//! 职责:
//! - 卷 / 章 / 节的数据模型
//! - 保序 JSON 反序列化
//! - 查询错误定义

mod aggregate;
mod entities;
mod errors;
mod ordered_map;

pub use aggregate::Corpus;
pub use entities::{Book, Chapter, Verse};
pub use errors::CorpusError;
