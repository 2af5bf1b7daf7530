//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod bible_handlers;
mod passage_handlers;
mod search_handlers;

pub use bible_handlers::*;
pub use passage_handlers::*;
pub use search_handlers::*;
