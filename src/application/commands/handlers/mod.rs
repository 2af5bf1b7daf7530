//! Command Handlers 实现

mod corpus_handlers;

pub use corpus_handlers::*;
