//! VerseIndex - 经文只读索引
//!
//! 持有加载完成的 Corpus，提供确定性、无副作用的查询：
//! - 卷 / 章 / 节列表
//! - 单节查询
//! - 章内分页
//! - 全文检索
//!
//! 构造后不再写入，可以通过 `Arc` 在任意多个调用方之间无锁共享。
//! 每次调用都从 Corpus 重新推导结果，不做缓存。

use std::num::NonZeroUsize;

use super::corpus::{Book, Chapter, Corpus, CorpusError, Verse};
use super::search::{Search, SearchMode};

/// 经文只读索引
#[derive(Debug, Clone)]
pub struct VerseIndex {
    corpus: Corpus,
}

impl VerseIndex {
    /// 创建索引
    ///
    /// 以下情况返回 `InvalidCorpus`:
    /// - Corpus 没有任何卷
    /// - 某卷没有任何章
    /// - 某章没有任何节
    pub fn new(corpus: Corpus) -> Result<Self, CorpusError> {
        if corpus.is_empty() {
            return Err(CorpusError::invalid("corpus contains no books"));
        }

        for book in corpus.books() {
            if book.chapters().is_empty() {
                return Err(CorpusError::invalid(format!(
                    "book {} contains no chapters",
                    book.name()
                )));
            }
            for chapter in book.chapters() {
                if chapter.verses().is_empty() {
                    return Err(CorpusError::invalid(format!(
                        "chapter {} {} contains no verses",
                        book.name(),
                        chapter.key()
                    )));
                }
            }
        }

        Ok(Self { corpus })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// 所有卷名（源文件顺序）
    pub fn list_books(&self) -> Vec<&str> {
        self.corpus.books().iter().map(Book::name).collect()
    }

    /// 某卷的所有章号
    pub fn list_chapters(&self, book: &str) -> Result<Vec<&str>, CorpusError> {
        Ok(self.book(book)?.chapters().iter().map(Chapter::key).collect())
    }

    /// 某章的所有经文 (节号, 文本)
    pub fn list_verses(&self, book: &str, chapter: &str) -> Result<Vec<(&str, &str)>, CorpusError> {
        Ok(pairs(self.chapter(book, chapter)?.verses()))
    }

    /// 单节经文
    pub fn get_verse(&self, book: &str, chapter: &str, verse: &str) -> Result<&str, CorpusError> {
        self.chapter(book, chapter)?
            .find_verse(verse)
            .map(Verse::text)
            .ok_or_else(|| CorpusError::unknown_verse(book, chapter, verse))
    }

    /// 章内分页
    ///
    /// 按 `page_size` 切分为连续的页，最后一页可能不满；
    /// 超出末页时返回空列表而不是错误
    pub fn paginate(
        &self,
        book: &str,
        chapter: &str,
        page_size: NonZeroUsize,
        page_index: usize,
    ) -> Result<Vec<(&str, &str)>, CorpusError> {
        let verses = self.chapter(book, chapter)?.verses();
        let start = page_index.saturating_mul(page_size.get());
        if start >= verses.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(page_size.get()).min(verses.len());
        Ok(pairs(&verses[start..end]))
    }

    /// 最大页号 = ceil(节数 / page_size) - 1，节数为 0 时为 0
    pub fn max_page_index(
        &self,
        book: &str,
        chapter: &str,
        page_size: NonZeroUsize,
    ) -> Result<usize, CorpusError> {
        let count = self.chapter(book, chapter)?.verse_count();
        Ok(count.div_ceil(page_size.get()).saturating_sub(1))
    }

    /// 全文检索
    ///
    /// 返回惰性迭代器，不设上限；截断到展示数量由调用方负责
    pub fn search<'a>(&'a self, query: &str, mode: SearchMode) -> Search<'a> {
        Search::new(self.corpus.books(), query, mode)
    }

    pub(crate) fn book(&self, book: &str) -> Result<&Book, CorpusError> {
        self.corpus
            .find_book(book)
            .ok_or_else(|| CorpusError::unknown_book(book))
    }

    pub(crate) fn chapter(&self, book: &str, chapter: &str) -> Result<&Chapter, CorpusError> {
        self.book(book)?
            .find_chapter(chapter)
            .ok_or_else(|| CorpusError::unknown_chapter(book, chapter))
    }
}

fn pairs(verses: &[Verse]) -> Vec<(&str, &str)> {
    verses.iter().map(|v| (v.key(), v.text())).collect()
}
