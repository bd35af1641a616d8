//! Voice API Port - 前端访问本服务的接口
//!
//! 对应 `/api/get-voices` 与 `/api/text-to-speech`

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::{Voice, VoiceId};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait VoiceApiPort: Send + Sync {
    /// 拉取音色目录
    async fn get_voices(&self) -> Result<Vec<Voice>, ApiClientError>;

    /// 提交合成，返回音频 URL
    async fn text_to_speech(&self, voice_id: &VoiceId, text: &str)
        -> Result<String, ApiClientError>;
}
