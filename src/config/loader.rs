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

use super::types::{AppConfig, BlobBackend};

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
const ENV_PREFIX: &str = "VOXDECK";

/// 加载应用配置
///
/// # 环境变量示例
/// - `VOXDECK_SERVER__PORT=8080`
/// - `VOXDECK_ELEVENLABS__TIMEOUT_SECS=30`
/// - `VOXDECK_BLOB__BACKEND=local`
///
/// 密钥本身不经过这里，见 `credentials` 段
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("elevenlabs.base_url", "https://api.elevenlabs.io")?
        .set_default("elevenlabs.model_id", "eleven_multilingual_v2")?
        .set_default("elevenlabs.stability", 0.5)?
        .set_default("elevenlabs.similarity_boost", 0.5)?
        .set_default("elevenlabs.timeout_secs", 120)?
        .set_default("blob.backend", "vercel")?
        .set_default("blob.base_url", "https://blob.vercel-storage.com")?
        .set_default("blob.local_dir", "data/blobs")?
        .set_default("blob.timeout_secs", 60)?
        .set_default("credentials.speech_api_key_env", "ELEVENLABS_API_KEY")?
        .set_default("credentials.blob_token_env", "VERCEL_BLOB_KEY")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 层级分隔符: __ (双下划线)，变量名会被转换为小写
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

    if config.elevenlabs.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "ElevenLabs base URL cannot be empty".to_string(),
        ));
    }

    for (name, value) in [
        ("stability", config.elevenlabs.stability),
        ("similarity_boost", config.elevenlabs.similarity_boost),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ValidationError(format!(
                "elevenlabs.{} must be within [0, 1], got {}",
                name, value
            )));
        }
    }

    if config.blob.backend == BlobBackend::Vercel && config.blob.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Blob base URL cannot be empty".to_string(),
        ));
    }

    if config.credentials.speech_api_key_env.is_empty()
        || config.credentials.blob_token_env.is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Credential variable names cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} at {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    tracing::info!("ElevenLabs URL: {}", config.elevenlabs.base_url);
    tracing::info!("ElevenLabs Model: {}", config.elevenlabs.model_id);
    tracing::info!("ElevenLabs Timeout: {}s", config.elevenlabs.timeout_secs);
    match config.blob.backend {
        BlobBackend::Vercel => tracing::info!("Blob Store: vercel ({})", config.blob.base_url),
        BlobBackend::Local => tracing::info!("Blob Store: local ({:?})", config.blob.local_dir),
    }
    tracing::info!(
        "Credential Variables: {}, {}",
        config.credentials.speech_api_key_env,
        config.credentials.blob_token_env
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
