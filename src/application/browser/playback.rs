//! Playback Controller - 双通道播放控制
//!
//! 持有所有音频元素：试听元素按音色 ID 索引，合成通道一个共享元素。
//! 试听通道的互斥规则在这里集中执行，事件处理器只调用本控制器。

use std::collections::HashMap;
use std::fmt::Display;

use crate::application::ports::AudioOutput;
use crate::domain::playback::{
    Completion, Decision, GeneratedChannel, GeneratedState, PlaybackKey, PreviewChannel,
    PreviewEffect,
};
use crate::domain::voice::VoiceId;

pub struct PlaybackController {
    preview: PreviewChannel,
    preview_outputs: HashMap<VoiceId, Box<dyn AudioOutput>>,
    generated: GeneratedChannel,
    generated_output: Box<dyn AudioOutput>,
}

impl PlaybackController {
    pub fn new(generated_output: Box<dyn AudioOutput>) -> Self {
        Self {
            preview: PreviewChannel::new(),
            preview_outputs: HashMap::new(),
            generated: GeneratedChannel::new(),
            generated_output,
        }
    }

    // ========== Preview channel ==========

    /// 渲染时注册某个音色的试听元素
    pub fn register_preview(&mut self, voice_id: VoiceId, output: Box<dyn AudioOutput>) {
        self.preview_outputs.insert(voice_id, output);
    }

    /// 目录整体替换时重建试听元素，正在试听的片段先停止
    pub fn replace_previews<I>(&mut self, outputs: I)
    where
        I: IntoIterator<Item = (VoiceId, Box<dyn AudioOutput>)>,
    {
        if let Some(current) = self.preview.reset() {
            if let Some(output) = self.preview_outputs.get_mut(&current) {
                output.pause();
            }
        }
        self.preview_outputs = outputs.into_iter().collect();
    }

    pub fn has_preview(&self, voice_id: &VoiceId) -> bool {
        self.preview_outputs.contains_key(voice_id)
    }

    /// 点击试听按钮；没有注册元素的音色直接忽略
    pub fn toggle_preview(&mut self, voice_id: &VoiceId) {
        if !self.preview_outputs.contains_key(voice_id) {
            tracing::debug!(voice_id = %voice_id, "No preview element registered");
            return;
        }

        for effect in self.preview.toggle(voice_id) {
            match effect {
                PreviewEffect::Stop(id) => {
                    if let Some(output) = self.preview_outputs.get_mut(&id) {
                        output.pause();
                    }
                }
                PreviewEffect::Start(id) => {
                    let Some(output) = self.preview_outputs.get_mut(&id) else {
                        continue;
                    };
                    if let Err(e) = output.play() {
                        tracing::error!(voice_id = %id, error = %e, "Preview playback failed");
                        self.preview.failed(&id);
                    }
                }
            }
        }
    }

    /// 试听片段自然结束
    pub fn preview_ended(&mut self, voice_id: &VoiceId) {
        self.preview.ended(voice_id);
    }

    pub fn playing_preview(&self) -> Option<&VoiceId> {
        self.preview.playing()
    }

    pub fn is_preview_playing(&self, voice_id: &VoiceId) -> bool {
        self.preview.is_playing(voice_id)
    }

    // ========== Generated channel ==========

    /// 处理合成音频的播放请求；Toggle 时直接操作播放器，不涉及网络
    pub fn request_generated(&mut self, key: PlaybackKey) -> Decision {
        let decision = self.generated.request(key);
        match &decision {
            Decision::Toggle { is_playing: true } => {
                if let Err(e) = self.generated_output.play() {
                    tracing::error!(error = %e, "Generated audio playback failed");
                    self.generated.playback_rejected();
                }
            }
            Decision::Toggle { is_playing: false } => self.generated_output.pause(),
            Decision::Synthesize(_) => {
                // 旧会话作废，旧音频不再播放也不再保留
                self.generated_output.pause();
                self.generated_output.clear_source();
            }
            Decision::AlreadyLoading => {}
        }
        decision
    }

    /// 应用合成结果；过期结果被丢弃
    pub fn complete_generated<E: Display>(
        &mut self,
        key: &PlaybackKey,
        result: Result<String, E>,
    ) -> Completion {
        if let Err(e) = &result {
            tracing::error!(voice_id = %key.voice_id, error = %e, "Speech synthesis failed");
        }

        let completion = self.generated.complete(key, result);
        match &completion {
            Completion::Ready { url } => {
                self.generated_output.set_source(url);
                if let Err(e) = self.generated_output.play() {
                    tracing::error!(url = %url, error = %e, "Generated audio playback failed");
                    self.generated.playback_rejected();
                }
            }
            Completion::Stale => {
                tracing::debug!(voice_id = %key.voice_id, "Discarding stale synthesis result");
            }
            Completion::Failed => self.generated_output.clear_source(),
        }
        completion
    }

    /// 合成音频自然结束
    pub fn generated_ended(&mut self) {
        self.generated.ended();
    }

    pub fn generated_state(&self) -> &GeneratedState {
        self.generated.state()
    }

    pub fn is_generating(&self) -> bool {
        self.generated.is_loading()
    }

    pub fn is_generated_playing(&self, voice_id: &VoiceId) -> bool {
        self.generated.is_playing_voice(voice_id)
    }

    pub fn generated_source(&self) -> Option<&str> {
        self.generated_output.source()
    }
}
