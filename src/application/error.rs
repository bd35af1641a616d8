//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{BlobStoreError, ProviderError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 缺少必需的密钥，不重试
    #[error("{0}")]
    MissingCredential(String),

    /// 上游返回非 2xx，原样转发
    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// 调用外部服务本身失败（网络、解析、存储）
    #[error("Transport error: {0}")]
    Transport(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// 创建缺少密钥错误
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential(message.into())
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<ProviderError> for ApplicationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, body } => Self::Upstream { status, body },
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<BlobStoreError> for ApplicationError {
    fn from(err: BlobStoreError) -> Self {
        // 存储失败统一视为内部错误，不透传存储服务的响应
        Self::Transport(err.to_string())
    }
}
