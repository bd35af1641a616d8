//! Blob Store Port - 出站端口
//!
//! 对象存储的抽象接口，合成音频通过它发布为公开 URL

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// 对象存储错误
#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("Blob store error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 访问权限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
        }
    }
}

/// 已存储对象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobInfo {
    pub url: String,
    pub pathname: String,
    pub size: u64,
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// 写入参数
#[derive(Debug, Clone)]
pub struct PutOptions {
    pub access: Access,
    pub content_type: String,
}

impl Default for PutOptions {
    fn default() -> Self {
        Self {
            access: Access::Public,
            content_type: "audio/mpeg".to_string(),
        }
    }
}

/// Blob Store Port
///
/// 每次调用都携带 token，token 在请求处理时读取
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// 列出所有对象
    async fn list(&self, token: &str) -> Result<Vec<BlobInfo>, BlobStoreError>;

    /// 按 URL 删除对象
    async fn delete(&self, token: &str, urls: &[String]) -> Result<(), BlobStoreError>;

    /// 写入对象，返回其公开信息
    async fn put(
        &self,
        token: &str,
        pathname: &str,
        data: Vec<u8>,
        options: PutOptions,
    ) -> Result<BlobInfo, BlobStoreError>;
}
