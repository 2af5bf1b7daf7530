//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "KAIBIBLE";

/// max_search_limit 的上限
const SEARCH_LIMIT_CEILING: usize = 10_000;

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `KAIBIBLE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `KAIBIBLE_SERVER__PORT=8080`
/// - `KAIBIBLE_CORPUS__PATH=/data/bible_data.json`
/// - `KAIBIBLE_CORPUS__URL=https://example.com/bible_data.json`
/// - `KAIBIBLE_READING__PAGE_SIZE=8`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "web")?
        .set_default("server.static_files.path", "/")?
        .set_default("corpus.path", "data/bible_data.json")?
        .set_default("corpus.timeout_secs", 30)?
        .set_default("corpus.max_retries", 2)?
        .set_default("reading.page_size", 10)?
        .set_default("reading.search_limit", 50)?
        .set_default("reading.max_search_limit", 500)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: KAIBIBLE_CORPUS__URL=https://example.com/bible_data.json
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    match &config.corpus.url {
        Some(url) if url.trim().is_empty() => {
            return Err(ConfigError::ValidationError(
                "Corpus URL cannot be empty".to_string(),
            ));
        }
        None if config.corpus.path.as_os_str().is_empty() => {
            return Err(ConfigError::ValidationError(
                "Corpus path cannot be empty".to_string(),
            ));
        }
        _ => {}
    }

    if config.reading.page_size == 0 {
        return Err(ConfigError::ValidationError(
            "Page size must be at least 1".to_string(),
        ));
    }

    if config.reading.max_search_limit > SEARCH_LIMIT_CEILING {
        return Err(ConfigError::ValidationError(format!(
            "Max search limit cannot exceed {}",
            SEARCH_LIMIT_CEILING
        )));
    }

    if config.reading.search_limit == 0
        || config.reading.search_limit > config.reading.max_search_limit
    {
        return Err(ConfigError::ValidationError(format!(
            "Search limit must be between 1 and {}",
            config.reading.max_search_limit
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} at {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    match &config.corpus.url {
        Some(url) => {
            tracing::info!("Corpus URL: {}", url);
            tracing::info!("Corpus Timeout: {}s", config.corpus.timeout_secs);
            tracing::info!("Corpus Max Retries: {}", config.corpus.max_retries);
        }
        None => tracing::info!("Corpus File: {:?}", config.corpus.path),
    }
    tracing::info!("Page Size: {}", config.reading.page_size);
    tracing::info!(
        "Search Limit: {} (max {})",
        config.reading.search_limit,
        config.reading.max_search_limit
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
