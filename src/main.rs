//! voxdeck - 音色目录浏览与语音合成服务
//!
//! 启动流程: 配置 -> 日志 -> 适配器 -> Handlers -> HTTP 服务

use std::sync::Arc;

use voxdeck::application::BlobStorePort;
use voxdeck::config::{load_config, print_config, AppConfig, BlobBackend};
use voxdeck::infrastructure::adapters::{
    ElevenLabsClient, ElevenLabsConfig, EnvCredentials, FileBlobStore, VercelBlobConfig,
    VercelBlobStore,
};
use voxdeck::infrastructure::http::{AppState, HttpServer, ServerConfig, BLOB_ROUTE};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},voxdeck={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_blob_store(config: &AppConfig) -> anyhow::Result<Arc<dyn BlobStorePort>> {
    let store: Arc<dyn BlobStorePort> = match config.blob.backend {
        BlobBackend::Vercel => Arc::new(VercelBlobStore::new(VercelBlobConfig {
            base_url: config.blob.base_url.clone(),
            timeout_secs: config.blob.timeout_secs,
        })?),
        BlobBackend::Local => {
            let public_url = format!("{}{}", config.server.public_base_url(), BLOB_ROUTE);
            Arc::new(FileBlobStore::new(&config.blob.local_dir, public_url).await?)
        }
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("voxdeck {}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 密钥在每次请求时读取，这里只提示缺失
    let credentials = Arc::new(EnvCredentials::new(
        &config.credentials.speech_api_key_env,
        &config.credentials.blob_token_env,
    ));
    if std::env::var(&config.credentials.speech_api_key_env).map_or(true, |v| v.is_empty()) {
        tracing::warn!(
            "{} is not set; voice requests will fail until it is",
            config.credentials.speech_api_key_env
        );
    }

    let speech = Arc::new(ElevenLabsClient::new(ElevenLabsConfig {
        base_url: config.elevenlabs.base_url.clone(),
        model_id: config.elevenlabs.model_id.clone(),
        stability: config.elevenlabs.stability,
        similarity_boost: config.elevenlabs.similarity_boost,
        timeout_secs: config.elevenlabs.timeout_secs,
    })?);

    let blob_store = build_blob_store(&config).await?;

    let state = AppState::new(credentials, speech.clone(), speech, blob_store);

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_files(
            &config.server.static_files.path,
            &config.server.static_files.dir,
        );
    }
    if config.blob.backend == BlobBackend::Local {
        server_config = server_config.with_blob_dir(&config.blob.local_dir);
    }

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
