//! Corpus Context - Entities

use serde::Deserialize;

use super::ordered_map::OrderedMap;

/// 经文 - 最小阅读单位
///
/// 不变量:
/// - key 在所属 Chapter 内唯一
/// - text 加载后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    key: String,
    text: String,
}

impl Verse {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// 章 - 按源文件顺序排列的经文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    key: String,
    verses: Vec<Verse>,
}

impl Chapter {
    pub fn new(key: impl Into<String>, verses: Vec<Verse>) -> Self {
        Self {
            key: key.into(),
            verses,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    pub fn find_verse(&self, key: &str) -> Option<&Verse> {
        self.verses.iter().find(|v| v.key == key)
    }

    /// 经文在本章中的位置（0 起）
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.verses.iter().position(|v| v.key == key)
    }
}

/// 卷 - 按源文件顺序排列的章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    chapters: Vec<Chapter>,
}

impl Book {
    pub fn new(name: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            name: name.into(),
            chapters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn find_chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.key == key)
    }

    pub(super) fn into_chapters(self) -> Vec<Chapter> {
        self.chapters
    }
}

// JSON 形态: {"1": {"1": "...", "2": "..."}, "2": {...}}
// 反序列化保留文档中的键顺序

impl<'de> Deserialize<'de> for Chapter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // 章的键由外层 Book 提供，这里只解析经文
        let verses = OrderedMap::<String>::deserialize(deserializer)?
            .into_entries()
            .into_iter()
            .map(|(key, text)| Verse::new(key, text))
            .collect();
        Ok(Chapter::new(String::new(), verses))
    }
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let chapters = OrderedMap::<Chapter>::deserialize(deserializer)?
            .into_entries()
            .into_iter()
            .map(|(key, chapter)| Chapter::new(key, chapter.verses))
            .collect();
        Ok(Book::new(String::new(), chapters))
    }
}
