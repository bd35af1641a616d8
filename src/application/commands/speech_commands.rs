//! Speech Commands - 文本合成相关命令

use crate::domain::voice::VoiceId;

/// 合成并发布音频
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    pub voice_id: VoiceId,
    pub text: String,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    /// 新写入对象的公开 URL
    pub url: String,
}
