//! Bible Queries - 卷 / 章 / 节浏览

/// 列出所有卷
#[derive(Debug, Clone)]
pub struct ListBooks;

/// 列出某卷的所有章
#[derive(Debug, Clone)]
pub struct ListChapters {
    pub book: String,
}

/// 获取章内某一页
#[derive(Debug, Clone)]
pub struct GetChapterPage {
    pub book: String,
    pub chapter: String,
    pub page: usize,
    pub page_size: Option<usize>,
}

/// 获取单节经文
#[derive(Debug, Clone)]
pub struct GetVerse {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

/// 定位经文所在页（检索结果跳转用）
#[derive(Debug, Clone)]
pub struct LocateVerse {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    pub page_size: Option<usize>,
}
