//! Bionify - 仿生阅读标注服务
//!
//! - Domain: annotation/ (标注引擎)
//! - Application: queries, ports
//! - Infrastructure: http, adapters

use bionify::config::{load_config, print_config, reader_settings};
use bionify::infrastructure::create_segmenter;
use bionify::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},bionify={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Bionify - 仿生阅读标注服务");
    print_config(&config);

    // 分词器只构造一次，所有请求只读共享
    let settings = reader_settings(&config)?;
    let segmenter = create_segmenter(settings.segmenter);

    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        config.server.max_body_bytes,
    );
    let server = HttpServer::new(server_config, AppState::new(segmenter, settings));

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
