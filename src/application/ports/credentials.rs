//! Credentials Port - 密钥读取
//!
//! 密钥在每次请求处理时读取，不缓存

/// 密钥来源
pub trait CredentialsPort: Send + Sync {
    /// 语音服务 API key
    fn speech_api_key(&self) -> Option<String>;

    /// 对象存储 token
    fn blob_token(&self) -> Option<String>;
}
