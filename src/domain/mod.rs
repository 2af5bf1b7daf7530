//! Domain Layer - 领域层
//!
//! - Corpus Context: 卷 / 章 / 节数据模型
//! - VerseIndex: 只读查询（列表、分页、检索）

pub mod corpus;
pub mod search;
mod verse_index;

pub use corpus::{Book, Chapter, Corpus, CorpusError, Verse};
pub use search::{Search, SearchHit, SearchMode};
pub use verse_index::VerseIndex;
