//! Corpus Context - Aggregate Root

use serde::{Deserialize, Deserializer};

use super::ordered_map::OrderedMap;
use super::{Book, Chapter};

/// Corpus 聚合根 - 完整的经文数据
///
/// 不变量:
/// - 卷名在 Corpus 内唯一
/// - 卷、章、节保持源文件顺序
/// - 加载后只读，不做局部更新
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_book(&self, name: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.name() == name)
    }

    pub fn chapter_count(&self) -> usize {
        self.books.iter().map(Book::chapter_count).sum()
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(Book::chapters)
            .map(Chapter::verse_count)
            .sum()
    }
}

impl<'de> Deserialize<'de> for Corpus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let books = OrderedMap::<Book>::deserialize(deserializer)?
            .into_entries()
            .into_iter()
            .map(|(name, book)| Book::new(name, book.into_chapters()))
            .collect();
        Ok(Corpus::new(books))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Genesis": {
            "1": {"1": "In the beginning God created the heaven and the earth.", "2": "And the earth was without form."},
            "2": {"1": "Thus the heavens and the earth were finished."}
        },
        "Exodus": {
            "1": {"1": "Now these are the names of the children of Israel."}
        }
    }"#;

    #[test]
    fn test_deserialize_sample() {
        let corpus: Corpus = serde_json::from_str(SAMPLE).unwrap();

        let names: Vec<&str> = corpus.books().iter().map(Book::name).collect();
        assert_eq!(names, vec!["Genesis", "Exodus"]);
        assert_eq!(corpus.chapter_count(), 3);
        assert_eq!(corpus.verse_count(), 4);

        let genesis = corpus.find_book("Genesis").unwrap();
        let chapter = genesis.find_chapter("1").unwrap();
        assert_eq!(chapter.key(), "1");
        assert_eq!(chapter.verses()[1].key(), "2");
    }

    #[test]
    fn test_deserialize_rejects_non_string_verse() {
        let result: Result<Corpus, _> = serde_json::from_str(r#"{"Gen": {"1": {"1": 42}}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_book() {
        let result: Result<Corpus, _> =
            serde_json::from_str(r#"{"Gen": {"1": {"1": "a"}}, "Gen": {"1": {"1": "b"}}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_object_parses_to_empty_corpus() {
        let corpus: Corpus = serde_json::from_str("{}").unwrap();
        assert!(corpus.is_empty());
    }
}
