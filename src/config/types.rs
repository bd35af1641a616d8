//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音服务配置
    #[serde(default)]
    pub elevenlabs: ElevenLabsSettings,

    /// 对象存储配置
    #[serde(default)]
    pub blob: BlobConfig,

    /// 密钥所在的环境变量名
    #[serde(default)]
    pub credentials: CredentialsConfig,

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

    /// 公开访问的 Base URL
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,

    /// 前端静态文件托管
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default)]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀（"/" 表示根路径托管）
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
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 语音服务配置
///
/// 合成参数固定在服务端，不接受请求方覆盖
#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsSettings {
    #[serde(default = "default_elevenlabs_url")]
    pub base_url: String,

    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(default = "default_voice_setting")]
    pub stability: f32,

    #[serde(default = "default_voice_setting")]
    pub similarity_boost: f32,

    /// 请求超时时间（秒）
    #[serde(default = "default_elevenlabs_timeout")]
    pub timeout_secs: u64,
}

fn default_elevenlabs_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_voice_setting() -> f32 {
    0.5
}

fn default_elevenlabs_timeout() -> u64 {
    120
}

impl Default for ElevenLabsSettings {
    fn default() -> Self {
        Self {
            base_url: default_elevenlabs_url(),
            model_id: default_model_id(),
            stability: default_voice_setting(),
            similarity_boost: default_voice_setting(),
            timeout_secs: default_elevenlabs_timeout(),
        }
    }
}

/// 对象存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobBackend {
    /// Vercel Blob REST API
    #[default]
    Vercel,
    /// 本地目录，经 /blobs 提供访问（开发用）
    Local,
}

/// 对象存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct BlobConfig {
    #[serde(default)]
    pub backend: BlobBackend,

    #[serde(default = "default_blob_url")]
    pub base_url: String,

    /// local 后端的存储目录
    #[serde(default = "default_blob_dir")]
    pub local_dir: PathBuf,

    #[serde(default = "default_blob_timeout")]
    pub timeout_secs: u64,
}

fn default_blob_url() -> String {
    "https://blob.vercel-storage.com".to_string()
}

fn default_blob_dir() -> PathBuf {
    PathBuf::from("data/blobs")
}

fn default_blob_timeout() -> u64 {
    60
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            backend: BlobBackend::default(),
            base_url: default_blob_url(),
            local_dir: default_blob_dir(),
            timeout_secs: default_blob_timeout(),
        }
    }
}

/// 密钥环境变量配置
///
/// 配置中只保存变量名，密钥在处理请求时从环境读取
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default = "default_speech_key_env")]
    pub speech_api_key_env: String,

    #[serde(default = "default_blob_token_env")]
    pub blob_token_env: String,
}

fn default_speech_key_env() -> String {
    "ELEVENLABS_API_KEY".to_string()
}

fn default_blob_token_env() -> String {
    "VERCEL_BLOB_KEY".to_string()
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            speech_api_key_env: default_speech_key_env(),
            blob_token_env: default_blob_token_env(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别，RUST_LOG 优先
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
