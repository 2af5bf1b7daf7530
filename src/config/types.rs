//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::application::queries::{
    ReadingOptions, DEFAULT_MAX_SEARCH_LIMIT, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_LIMIT,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 经文数据源配置
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// 阅读配置（分页、检索）
    #[serde(default)]
    pub reading: ReadingConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default)]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀（如 "/" 表示根路径托管）
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_static_path() -> String {
    "/".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

/// 经文数据源配置
///
/// 设置了 `url` 时从远程拉取，否则读取本地 `path`
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// 本地 JSON 文件路径
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,

    /// 远程 JSON 地址
    #[serde(default)]
    pub url: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_corpus_timeout")]
    pub timeout_secs: u64,

    /// 最大重试次数
    #[serde(default = "default_corpus_retries")]
    pub max_retries: u32,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("data/bible_data.json")
}

fn default_corpus_timeout() -> u64 {
    30
}

fn default_corpus_retries() -> u32 {
    2
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            url: None,
            timeout_secs: default_corpus_timeout(),
            max_retries: default_corpus_retries(),
        }
    }
}

/// 阅读配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingConfig {
    /// 默认每页经文数
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// 默认检索展示上限
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// 单次检索允许的最大展示数
    #[serde(default = "default_max_search_limit")]
    pub max_search_limit: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

fn default_max_search_limit() -> usize {
    DEFAULT_MAX_SEARCH_LIMIT
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_limit: default_search_limit(),
            max_search_limit: default_max_search_limit(),
        }
    }
}

impl ReadingConfig {
    /// 转换为查询处理器使用的选项，page_size 为 0 时返回 None
    pub fn options(&self) -> Option<ReadingOptions> {
        Some(ReadingOptions {
            page_size: NonZeroUsize::new(self.page_size)?,
            search_limit: self.search_limit,
            max_search_limit: self.max_search_limit,
        })
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5060);
        assert_eq!(config.corpus.path, PathBuf::from("data/bible_data.json"));
        assert!(config.corpus.url.is_none());
        assert_eq!(config.reading.page_size, 10);
        assert_eq!(config.reading.search_limit, 50);
    }

    #[test]
    fn test_reading_options() {
        let options = ReadingConfig::default().options().unwrap();
        assert_eq!(options, ReadingOptions::default());

        let config = ReadingConfig {
            page_size: 0,
            ..ReadingConfig::default()
        };
        assert!(config.options().is_none());
    }
}
