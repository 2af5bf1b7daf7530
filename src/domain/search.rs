//! 全文检索
//!
//! 对整个 Corpus 做线性扫描，大小写不敏感，支持两种模式：
//! - exact: 查询串作为连续子串出现
//! - all_words: 按空白切分为多个词，每个词都要出现（顺序不限）

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::corpus::Book;

/// 检索模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Exact,
    #[serde(alias = "allWords")]
    AllWords,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Exact => "exact",
            SearchMode::AllWords => "all_words",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(SearchMode::Exact),
            "all_words" | "allWords" => Ok(SearchMode::AllWords),
            other => Err(format!("unknown search mode: {}", other)),
        }
    }
}

/// 检索命中
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub book: &'a str,
    pub chapter: &'a str,
    pub verse: &'a str,
    pub text: &'a str,
}

/// 预处理后的查询（全部转为小写）
///
/// terms 为空时不匹配任何经文
#[derive(Debug, Clone)]
struct Matcher {
    terms: Vec<String>,
}

impl Matcher {
    fn new(query: &str, mode: SearchMode) -> Self {
        let terms = match mode {
            SearchMode::Exact if query.is_empty() => Vec::new(),
            SearchMode::Exact => vec![query.to_lowercase()],
            SearchMode::AllWords => query.split_whitespace().map(str::to_lowercase).collect(),
        };
        Self { terms }
    }

    fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.terms.iter().all(|term| text.contains(term.as_str()))
    }
}

/// 惰性检索迭代器
///
/// 遍历顺序：卷 → 章 → 节，均为 Corpus 顺序，与模式无关
#[derive(Debug, Clone)]
pub struct Search<'a> {
    books: &'a [Book],
    matcher: Matcher,
    book: usize,
    chapter: usize,
    verse: usize,
}

impl<'a> Search<'a> {
    pub(crate) fn new(books: &'a [Book], query: &str, mode: SearchMode) -> Self {
        let matcher = Matcher::new(query, mode);
        // 空查询直接跳到末尾
        let book = if matcher.is_empty() { books.len() } else { 0 };
        Self {
            books,
            matcher,
            book,
            chapter: 0,
            verse: 0,
        }
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let books = self.books;
        while let Some(book) = books.get(self.book) {
            while let Some(chapter) = book.chapters().get(self.chapter) {
                while let Some(verse) = chapter.verses().get(self.verse) {
                    self.verse += 1;
                    if self.matcher.matches(verse.text()) {
                        return Some(SearchHit {
                            book: book.name(),
                            chapter: chapter.key(),
                            verse: verse.key(),
                            text: verse.text(),
                        });
                    }
                }
                self.chapter += 1;
                self.verse = 0;
            }
            self.book += 1;
            self.chapter = 0;
        }
        None
    }
}

impl FusedIterator for Search<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher_is_case_insensitive() {
        let matcher = Matcher::new("LIGHT", SearchMode::Exact);
        assert!(matcher.matches("Let there be light"));
        assert!(!matcher.matches("Let there be lamps"));
    }

    #[test]
    fn test_exact_matcher_requires_contiguous_phrase() {
        let matcher = Matcher::new("be light", SearchMode::Exact);
        assert!(matcher.matches("let there be light"));
        assert!(!matcher.matches("light there be"));
    }

    #[test]
    fn test_all_words_matcher_ignores_order() {
        let matcher = Matcher::new("  light   THERE ", SearchMode::AllWords);
        assert!(matcher.matches("Let there be light"));
        assert!(!matcher.matches("Let there be darkness"));
    }

    #[test]
    fn test_blank_queries_match_nothing() {
        assert!(Matcher::new("", SearchMode::Exact).is_empty());
        assert!(Matcher::new("", SearchMode::AllWords).is_empty());
        assert!(Matcher::new(" \t\n", SearchMode::AllWords).is_empty());
    }

    #[test]
    fn test_exact_whitespace_query_is_literal() {
        let matcher = Matcher::new("  ", SearchMode::Exact);
        assert!(!matcher.is_empty());
        assert!(matcher.matches("end of sentence.  Next"));
        assert!(!matcher.matches("single spaced text"));
    }

    #[test]
    fn test_search_mode_parsing() {
        assert_eq!("exact".parse::<SearchMode>().unwrap(), SearchMode::Exact);
        assert_eq!("all_words".parse::<SearchMode>().unwrap(), SearchMode::AllWords);
        assert_eq!("allWords".parse::<SearchMode>().unwrap(), SearchMode::AllWords);
        assert!("fuzzy".parse::<SearchMode>().is_err());
    }

    #[test]
    fn test_search_mode_serde() {
        let mode: SearchMode = serde_json::from_str(r#""allWords""#).unwrap();
        assert_eq!(mode, SearchMode::AllWords);
        assert_eq!(serde_json::to_string(&mode).unwrap(), r#""all_words""#);
    }
}
