//! Speech Provider Port - 外部语音服务抽象
//!
//! 音色目录与文本合成两个出站端口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::{Voice, VoiceId};

/// 语音服务错误
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 上游返回非 2xx，状态码与响应体原样保留
    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub voice_id: VoiceId,
    pub text: String,
}

/// 合成出的音频
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// 音色目录端口
#[async_trait]
pub trait VoiceCatalogPort: Send + Sync {
    /// 拉取完整的音色目录
    async fn list_voices(&self, api_key: &str) -> Result<Vec<Voice>, ProviderError>;
}

/// 文本合成端口
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// 合成语音，返回原始音频字节
    async fn synthesize(
        &self,
        api_key: &str,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, ProviderError>;
}
