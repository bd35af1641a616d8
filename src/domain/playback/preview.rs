//! Preview Channel - 试听通道状态机
//!
//! 同一时刻最多一个音色在试听；切换音色时必须先停止旧的再启动新的

use crate::domain::voice::VoiceId;

/// 试听通道状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Idle,
    Playing(VoiceId),
}

/// 需要施加到音频句柄上的动作，按顺序执行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEffect {
    Stop(VoiceId),
    Start(VoiceId),
}

#[derive(Debug, Default)]
pub struct PreviewChannel {
    state: PreviewState,
}

impl PreviewChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn playing(&self) -> Option<&VoiceId> {
        match &self.state {
            PreviewState::Playing(id) => Some(id),
            PreviewState::Idle => None,
        }
    }

    pub fn is_playing(&self, voice_id: &VoiceId) -> bool {
        self.playing() == Some(voice_id)
    }

    /// 点击试听按钮
    pub fn toggle(&mut self, voice_id: &VoiceId) -> Vec<PreviewEffect> {
        match std::mem::take(&mut self.state) {
            PreviewState::Idle => {
                self.state = PreviewState::Playing(voice_id.clone());
                vec![PreviewEffect::Start(voice_id.clone())]
            }
            PreviewState::Playing(current) if &current == voice_id => {
                vec![PreviewEffect::Stop(current)]
            }
            PreviewState::Playing(current) => {
                self.state = PreviewState::Playing(voice_id.clone());
                vec![
                    PreviewEffect::Stop(current),
                    PreviewEffect::Start(voice_id.clone()),
                ]
            }
        }
    }

    /// 片段自然播放结束
    pub fn ended(&mut self, voice_id: &VoiceId) -> bool {
        if self.is_playing(voice_id) {
            self.state = PreviewState::Idle;
            true
        } else {
            false
        }
    }

    /// 加载或播放失败，回到 Idle
    pub fn failed(&mut self, voice_id: &VoiceId) {
        if self.is_playing(voice_id) {
            self.state = PreviewState::Idle;
        }
    }

    /// 强制停止（例如目录被替换），返回需要停止的音色
    pub fn reset(&mut self) -> Option<VoiceId> {
        match std::mem::take(&mut self.state) {
            PreviewState::Playing(id) => Some(id),
            PreviewState::Idle => None,
        }
    }
}
