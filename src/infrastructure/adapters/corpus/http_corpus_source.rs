//! HTTP Corpus Source - 从远程地址拉取经文 JSON
//!
//! GET {url} -> 200 + JSON 对象
//! 网络错误、超时和 5xx 会按配置重试，4xx 直接失败

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::application::ports::{CorpusSourcePort, LoadError};
use crate::domain::Corpus;

/// HTTP 数据源配置
#[derive(Debug, Clone)]
pub struct HttpCorpusSourceConfig {
    /// 数据地址
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 最大重试次数（不含首次请求）
    pub max_retries: u32,
    /// 重试间隔基数（毫秒），第 n 次重试等待 n * retry_delay_ms
    pub retry_delay_ms: u64,
}

impl Default for HttpCorpusSourceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000/bible_data.json".to_string(),
            timeout_secs: 30,
            max_retries: 2,
            retry_delay_ms: 500,
        }
    }
}

impl HttpCorpusSourceConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retries(mut self, max_retries: u32, retry_delay_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_delay_ms = retry_delay_ms;
        self
    }
}

/// HTTP 数据源
pub struct HttpCorpusSource {
    client: Client,
    config: HttpCorpusSourceConfig,
}

impl HttpCorpusSource {
    pub fn new(config: HttpCorpusSourceConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn fetch_once(&self) -> Result<Corpus, LoadError> {
        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LoadError::Timeout
                } else {
                    LoadError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                LoadError::Timeout
            } else {
                LoadError::Network(format!("Failed to read body: {}", e))
            }
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// 是否值得重试
fn is_retryable(err: &LoadError) -> bool {
    match err {
        LoadError::Network(_) | LoadError::Timeout => true,
        LoadError::Status(code) => StatusCode::from_u16(*code)
            .map(|s| s.is_server_error())
            .unwrap_or(false),
        _ => false,
    }
}

#[async_trait]
impl CorpusSourcePort for HttpCorpusSource {
    async fn load(&self) -> Result<Corpus, LoadError> {
        let mut attempt = 0;
        loop {
            tracing::debug!(url = %self.config.url, attempt, "Fetching corpus");

            match self.fetch_once().await {
                Ok(corpus) => return Ok(corpus),
                Err(e) if attempt < self.config.max_retries && is_retryable(&e) => {
                    attempt += 1;
                    let delay = Duration::from_millis(self.config.retry_delay_ms * u64::from(attempt));
                    tracing::warn!(
                        url = %self.config.url,
                        error = %e,
                        attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Corpus fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn describe(&self) -> String {
        self.config.url.clone()
    }
}
