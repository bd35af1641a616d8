//! Synthesis Request Orchestrator
//!
//! 决定一次播放请求是纯切换还是需要重新合成，并把合成结果绑定到播放通道。
//!
//! 没有取消机制：每个请求都带着自己的 (音色, 文本) key，结果返回时
//! 与通道当前期望的 key 比较，不一致则丢弃（后发请求优先）。
//! 也没有超时：请求挂起时通道一直停留在 Loading。

use std::sync::Arc;

use crate::application::ports::{ApiClientError, VoiceApiPort};
use crate::application::browser::PlaybackController;
use crate::domain::playback::{Completion, Decision, PlaybackKey};
use crate::domain::voice::VoiceId;

/// 已进入 Loading、等待发出的合成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSynthesis {
    pub key: PlaybackKey,
}

/// 网络调用完成后的结果，尚未应用到通道
#[derive(Debug)]
pub struct SynthesisResult {
    pub key: PlaybackKey,
    pub result: Result<String, ApiClientError>,
}

/// 一次播放请求的最终结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// 纯切换，无网络调用
    Toggled { is_playing: bool },
    /// 相同请求已在进行中
    AlreadyLoading,
    /// 发起了合成
    Synthesized(Completion),
}

pub struct SynthesisOrchestrator {
    api: Arc<dyn VoiceApiPort>,
}

impl SynthesisOrchestrator {
    pub fn new(api: Arc<dyn VoiceApiPort>) -> Self {
        Self { api }
    }

    /// 第一步：更新通道状态，需要合成时返回待发请求
    pub fn begin(
        &self,
        playback: &mut PlaybackController,
        voice_id: &VoiceId,
        text: &str,
    ) -> Result<PendingSynthesis, PlayOutcome> {
        match playback.request_generated(PlaybackKey::new(voice_id.clone(), text)) {
            Decision::Synthesize(key) => {
                tracing::info!(voice_id = %key.voice_id, text_len = key.text.len(), "Requesting speech synthesis");
                Ok(PendingSynthesis { key })
            }
            Decision::Toggle { is_playing } => Err(PlayOutcome::Toggled { is_playing }),
            Decision::AlreadyLoading => Err(PlayOutcome::AlreadyLoading),
        }
    }

    /// 第二步：发出网络请求（不持有通道）
    pub async fn run(&self, pending: PendingSynthesis) -> SynthesisResult {
        let result = self
            .api
            .text_to_speech(&pending.key.voice_id, &pending.key.text)
            .await;
        SynthesisResult {
            key: pending.key,
            result,
        }
    }

    /// 第三步：把结果应用到通道，过期结果被丢弃
    pub fn finish(&self, playback: &mut PlaybackController, result: SynthesisResult) -> Completion {
        playback.complete_generated(&result.key, result.result)
    }

    /// 完整流程
    pub async fn play(
        &self,
        playback: &mut PlaybackController,
        voice_id: &VoiceId,
        text: &str,
    ) -> PlayOutcome {
        let pending = match self.begin(playback, voice_id, text) {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let result = self.run(pending).await;
        PlayOutcome::Synthesized(self.finish(playback, result))
    }
}
