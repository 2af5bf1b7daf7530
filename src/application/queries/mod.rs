//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：所有查询都落在只读的 VerseIndex 上

mod bible_queries;
mod passage_queries;
mod reading_options;
mod search_queries;

pub mod handlers;

pub use bible_queries::*;
pub use passage_queries::*;
pub use reading_options::*;
pub use search_queries::*;
