//! Browser Session - 页面级状态
//!
//! 组合目录拉取、过滤、试听与合成播放；所有方法都由 UI 事件或网络回调驱动，
//! 单线程执行。

use std::sync::Arc;

use crate::application::browser::{
    FilterController, PlayOutcome, PlaybackController, SynthesisOrchestrator,
};
use crate::application::ports::{AudioOutputFactory, VoiceApiPort};
use crate::domain::catalog::{FacetSelection, FacetValueSet};
use crate::domain::playback::GeneratedState;
use crate::domain::voice::{Facet, Voice, VoiceId};

pub struct BrowserSession {
    api: Arc<dyn VoiceApiPort>,
    audio: Arc<dyn AudioOutputFactory>,
    filter: FilterController,
    playback: PlaybackController,
    orchestrator: SynthesisOrchestrator,
    text: String,
    catalog_loading: bool,
}

impl BrowserSession {
    pub fn new(api: Arc<dyn VoiceApiPort>, audio: Arc<dyn AudioOutputFactory>) -> Self {
        let playback = PlaybackController::new(audio.create(None));
        Self {
            orchestrator: SynthesisOrchestrator::new(api.clone()),
            api,
            audio,
            filter: FilterController::new(),
            playback,
            text: String::new(),
            catalog_loading: false,
        }
    }

    /// 拉取音色目录
    ///
    /// 失败时只记录日志，列表保持原样（初始为空）
    pub async fn load_catalog(&mut self) -> bool {
        self.catalog_loading = true;
        let result = self.api.get_voices().await;
        self.catalog_loading = false;

        match result {
            Ok(voices) => {
                let audio = &self.audio;
                // 没有试听地址的音色不创建试听元素
                self.playback.replace_previews(
                    voices
                        .iter()
                        .filter(|voice| !voice.preview_url.is_empty())
                        .map(|voice| {
                            (
                                voice.voice_id.clone(),
                                audio.create(Some(&voice.preview_url)),
                            )
                        }),
                );
                tracing::info!(count = voices.len(), "Voice catalog loaded");
                self.filter.set_voices(voices);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch voices");
                false
            }
        }
    }

    pub fn is_catalog_loading(&self) -> bool {
        self.catalog_loading
    }

    // ========== Filters ==========

    pub fn set_facet(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        self.filter.set_facet(facet, value)
    }

    pub fn clear_filters(&mut self) -> bool {
        self.filter.clear()
    }

    pub fn voices(&self) -> &Arc<[Voice]> {
        self.filter.voices()
    }

    pub fn visible_voices(&self) -> &Arc<[Voice]> {
        self.filter.filtered()
    }

    pub fn facet_values(&self) -> &FacetValueSet {
        self.filter.facet_values()
    }

    pub fn selection(&self) -> &FacetSelection {
        self.filter.selection()
    }

    // ========== Text ==========

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    // ========== Preview ==========

    pub fn toggle_preview(&mut self, voice_id: &VoiceId) {
        self.playback.toggle_preview(voice_id);
    }

    pub fn preview_ended(&mut self, voice_id: &VoiceId) {
        self.playback.preview_ended(voice_id);
    }

    pub fn is_preview_playing(&self, voice_id: &VoiceId) -> bool {
        self.playback.is_preview_playing(voice_id)
    }

    // ========== Generated ==========

    /// 用当前文本播放指定音色；文本为空时不提供播放按钮，返回 None
    pub async fn play_generated(&mut self, voice_id: &VoiceId) -> Option<PlayOutcome> {
        if self.text.is_empty() {
            return None;
        }
        let text = self.text.clone();
        Some(
            self.orchestrator
                .play(&mut self.playback, voice_id, &text)
                .await,
        )
    }

    pub fn generated_ended(&mut self) {
        self.playback.generated_ended();
    }

    pub fn is_generating(&self) -> bool {
        self.playback.is_generating()
    }

    pub fn is_generated_playing(&self, voice_id: &VoiceId) -> bool {
        self.playback.is_generated_playing(voice_id)
    }

    pub fn generated_state(&self) -> &GeneratedState {
        self.playback.generated_state()
    }

    /// 需要自行调度网络请求的宿主使用
    pub fn playback_mut(&mut self) -> (&SynthesisOrchestrator, &mut PlaybackController) {
        (&self.orchestrator, &mut self.playback)
    }
}
