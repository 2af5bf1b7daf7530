//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CorpusSource）
//! - commands: 启动时的数据加载
//! - queries: CQRS 查询及处理器（浏览、检索、分享文本）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{LoadCorpusHandler, LoadCorpusResponse},
    LoadCorpus,
};

pub use error::ApplicationError;

pub use ports::{CorpusSourcePort, LoadError};

pub use queries::{
    // Bible queries
    GetChapterPage,
    GetVerse,
    ListBooks,
    ListChapters,
    LocateVerse,
    // Search / passage queries
    FormatPassage,
    SearchVerses,
    // Options
    ReadingOptions,
    // Handlers
    handlers::{
        FormatPassageHandler, GetChapterPageHandler, GetVerseHandler, ListBooksHandler,
        ListChaptersHandler, LocateVerseHandler, SearchVersesHandler,
    },
};
