//! Passage Query Handlers
//!
//! 把选中的经文整理为一段可分享的纯文本:
//!
//! ```text
//! Genesis 1:1-3,5
//! 1. In the beginning God created the heaven and the earth.
//! 2. ...
//! ```
//!
//! 只负责文本，发送（短信、邮件、剪贴板）由客户端完成

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::handlers::VerseResponse;
use crate::application::queries::FormatPassage;
use crate::domain::VerseIndex;

/// 分享文本
#[derive(Debug, Clone, Serialize)]
pub struct PassageResponse {
    pub book: String,
    pub chapter: String,
    /// 形如 `Genesis 1:1-3,5`
    pub reference: String,
    /// 按章内顺序排列、去重后的经文
    pub verses: Vec<VerseResponse>,
    pub text: String,
}

/// FormatPassage Handler
pub struct FormatPassageHandler {
    index: Arc<VerseIndex>,
}

impl FormatPassageHandler {
    pub fn new(index: Arc<VerseIndex>) -> Self {
        Self { index }
    }

    pub fn handle(&self, query: FormatPassage) -> Result<PassageResponse, ApplicationError> {
        if query.verses.is_empty() {
            return Err(ApplicationError::validation("no verses selected"));
        }

        let chapter_verses = self.index.list_verses(&query.book, &query.chapter)?;

        let mut positions = query
            .verses
            .iter()
            .map(|verse| {
                chapter_verses
                    .iter()
                    .position(|(key, _)| *key == verse.as_str())
                    .ok_or_else(|| {
                        ApplicationError::not_found(
                            "Verse",
                            format!("{} {}:{}", query.book, query.chapter, verse),
                        )
                    })
            })
            .collect::<Result<Vec<usize>, ApplicationError>>()?;
        positions.sort_unstable();
        positions.dedup();

        let reference = format!(
            "{} {}:{}",
            query.book,
            query.chapter,
            verse_ranges(&positions, |p| chapter_verses[p].0)
        );

        let verses: Vec<VerseResponse> = positions
            .iter()
            .map(|&p| VerseResponse::from(chapter_verses[p]))
            .collect();

        let mut text = reference.clone();
        for verse in &verses {
            text.push('\n');
            text.push_str(&verse.key);
            text.push_str(". ");
            text.push_str(&verse.text);
        }

        Ok(PassageResponse {
            book: query.book,
            chapter: query.chapter,
            reference,
            verses,
            text,
        })
    }
}

/// 将有序位置折叠为区间表示：相邻位置合并为 `a-b`，其余用逗号分隔
fn verse_ranges<'a>(positions: &[usize], key_at: impl Fn(usize) -> &'a str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0;

    while i < positions.len() {
        let start = positions[i];
        let mut end = start;
        while i + 1 < positions.len() && positions[i + 1] == end + 1 {
            i += 1;
            end = positions[i];
        }

        if start == end {
            parts.push(key_at(start).to_string());
        } else {
            parts.push(format!("{}-{}", key_at(start), key_at(end)));
        }
        i += 1;
    }

    parts.join(",")
}
