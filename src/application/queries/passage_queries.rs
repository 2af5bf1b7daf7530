//! Passage Queries

/// 将选中的经文整理成可分享的文本
#[derive(Debug, Clone)]
pub struct FormatPassage {
    pub book: String,
    pub chapter: String,
    pub verses: Vec<String>,
}
