//! Data Transfer Objects
//!
//! 服务端与前端 API 客户端共用

use serde::{Deserialize, Serialize};

use crate::domain::voice::Voice;

/// 错误响应格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
}

// ============================================================================
// Text-to-speech DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToSpeechRequest {
    #[serde(rename = "voiceId")]
    pub voice_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToSpeechResponse {
    pub url: String,
}
