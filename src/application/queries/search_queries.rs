//! Search Queries

use crate::domain::SearchMode;

/// 全文检索
#[derive(Debug, Clone)]
pub struct SearchVerses {
    pub query: String,
    pub mode: SearchMode,
    pub limit: Option<usize>,
}
