//! 应用层 - 命令
//!
//! 经文数据只在启动时写入一次，之后全部为只读查询

mod corpus_commands;

pub mod handlers;

pub use corpus_commands::*;
