//! 阅读相关的默认值（分页大小、检索展示上限）

use std::num::NonZeroUsize;

use crate::application::error::ApplicationError;

/// 默认每页经文数
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 默认检索展示上限
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// 单次检索允许的最大展示数
pub const DEFAULT_MAX_SEARCH_LIMIT: usize = 500;

/// 查询处理器共享的阅读配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingOptions {
    pub page_size: NonZeroUsize,
    pub search_limit: usize,
    pub max_search_limit: usize,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_search_limit: DEFAULT_MAX_SEARCH_LIMIT,
        }
    }
}

impl ReadingOptions {
    /// 请求未指定时使用默认页大小，指定为 0 视为非法
    pub fn resolve_page_size(&self, requested: Option<usize>) -> Result<NonZeroUsize, ApplicationError> {
        match requested {
            None => Ok(self.page_size),
            Some(size) => NonZeroUsize::new(size)
                .ok_or_else(|| ApplicationError::validation("page_size must be at least 1")),
        }
    }

    /// 请求未指定时使用默认上限，超过最大值时截到最大值
    pub fn resolve_search_limit(&self, requested: Option<usize>) -> Result<usize, ApplicationError> {
        match requested {
            None => Ok(self.search_limit.min(self.max_search_limit)),
            Some(0) => Err(ApplicationError::validation("limit must be at least 1")),
            Some(limit) => Ok(limit.min(self.max_search_limit)),
        }
    }
}
