//! KaiBible - 经文阅读与检索服务
//!
//! 启动流程：加载配置 -> 初始化日志 -> 加载经文 -> 启动 HTTP 服务

use std::sync::Arc;

use kaibible::application::ports::CorpusSourcePort;
use kaibible::application::{LoadCorpus, LoadCorpusHandler};
use kaibible::config::{load_config, print_config, AppConfig};
use kaibible::infrastructure::adapters::{
    FileCorpusSource, HttpCorpusSource, HttpCorpusSourceConfig,
};
use kaibible::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},kaibible={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 根据配置选择数据源：设置了 URL 时走 HTTP，否则读本地文件
fn corpus_source(config: &AppConfig) -> anyhow::Result<Arc<dyn CorpusSourcePort>> {
    match &config.corpus.url {
        Some(url) => {
            let source_config = HttpCorpusSourceConfig::new(url.clone())
                .with_timeout(config.corpus.timeout_secs)
                .with_max_retries(config.corpus.max_retries);
            Ok(Arc::new(HttpCorpusSource::new(source_config)?))
        }
        None => Ok(Arc::new(FileCorpusSource::new(&config.corpus.path))),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("KaiBible - 经文阅读与检索服务");
    print_config(&config);

    let options = config
        .reading
        .options()
        .ok_or_else(|| anyhow::anyhow!("Page size must be at least 1"))?;

    // 加载经文，失败时直接退出
    let loaded = LoadCorpusHandler::new(corpus_source(&config)?)
        .handle(LoadCorpus)
        .await?;

    let state = AppState::new(loaded.index, options);

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_files(
            &config.server.static_files.dir,
            &config.server.static_files.path,
        );
    }

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
