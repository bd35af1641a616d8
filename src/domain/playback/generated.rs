//! Generated Channel - 合成音频通道状态机
//!
//! 单一共享通道，以 (音色, 文本) 作为会话 key。
//! 文本比较是精确字符串比较，不做 trim 或任何归一化，
//! 多一个空格也视为新的请求。

use crate::domain::voice::VoiceId;

/// 合成请求 key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackKey {
    pub voice_id: VoiceId,
    pub text: String,
}

impl PlaybackKey {
    pub fn new(voice_id: impl Into<VoiceId>, text: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            text: text.into(),
        }
    }
}

/// 合成通道状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GeneratedState {
    #[default]
    Idle,
    Loading(PlaybackKey),
    Ready {
        key: PlaybackKey,
        url: String,
        is_playing: bool,
    },
}

/// 播放请求的处理决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// 与当前 Ready 会话相同，只切换播放/暂停
    Toggle { is_playing: bool },
    /// 相同 key 的请求已在进行中
    AlreadyLoading,
    /// 需要发起新的合成请求；旧会话已作废
    Synthesize(PlaybackKey),
}

/// 合成结果的应用情况
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// 成功，url 已绑定并开始播放
    Ready { url: String },
    /// 失败，通道回到 Idle
    Failed,
    /// 结果已过期（被更新的请求取代），丢弃
    Stale,
}

#[derive(Debug, Default)]
pub struct GeneratedChannel {
    state: GeneratedState,
}

impl GeneratedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GeneratedState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GeneratedState::Loading(_))
    }

    /// 当前期望的 key（Loading 或 Ready）
    pub fn current_key(&self) -> Option<&PlaybackKey> {
        match &self.state {
            GeneratedState::Idle => None,
            GeneratedState::Loading(key) => Some(key),
            GeneratedState::Ready { key, .. } => Some(key),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, GeneratedState::Ready { is_playing: true, .. })
    }

    /// 指定音色是否正在播放合成音频
    pub fn is_playing_voice(&self, voice_id: &VoiceId) -> bool {
        matches!(
            &self.state,
            GeneratedState::Ready { key, is_playing: true, .. } if &key.voice_id == voice_id
        )
    }

    /// 处理一次播放请求
    pub fn request(&mut self, key: PlaybackKey) -> Decision {
        match &mut self.state {
            GeneratedState::Ready {
                key: current,
                is_playing,
                ..
            } if *current == key => {
                *is_playing = !*is_playing;
                Decision::Toggle {
                    is_playing: *is_playing,
                }
            }
            GeneratedState::Loading(current) if *current == key => Decision::AlreadyLoading,
            _ => {
                self.state = GeneratedState::Loading(key.clone());
                Decision::Synthesize(key)
            }
        }
    }

    /// 应用合成结果；只有 key 与当前 Loading 一致时才生效
    pub fn complete<E>(&mut self, key: &PlaybackKey, result: Result<String, E>) -> Completion {
        match &self.state {
            GeneratedState::Loading(current) if current == key => {}
            _ => return Completion::Stale,
        }

        match result {
            Ok(url) => {
                self.state = GeneratedState::Ready {
                    key: key.clone(),
                    url: url.clone(),
                    is_playing: true,
                };
                Completion::Ready { url }
            }
            Err(_) => {
                self.state = GeneratedState::Idle;
                Completion::Failed
            }
        }
    }

    /// 播放自然结束
    pub fn ended(&mut self) {
        if let GeneratedState::Ready { is_playing, .. } = &mut self.state {
            *is_playing = false;
        }
    }

    /// 播放器拒绝播放时回退到暂停状态
    pub fn playback_rejected(&mut self) {
        self.ended();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(voice: &str, text: &str) -> PlaybackKey {
        PlaybackKey::new(voice, text)
    }

    fn ready(channel: &mut GeneratedChannel, k: PlaybackKey, url: &str) {
        assert_eq!(channel.request(k.clone()), Decision::Synthesize(k.clone()));
        assert_eq!(
            channel.complete::<()>(&k, Ok(url.to_string())),
            Completion::Ready { url: url.to_string() }
        );
    }

    #[test]
    fn test_first_request_synthesizes() {
        let mut channel = GeneratedChannel::new();
        let k = key("v1", "Hello");
        assert_eq!(channel.request(k.clone()), Decision::Synthesize(k.clone()));
        assert_eq!(channel.state(), &GeneratedState::Loading(k));
        assert!(channel.is_loading());
    }

    #[test]
    fn test_success_binds_url_and_plays() {
        let mut channel = GeneratedChannel::new();
        ready(&mut channel, key("v1", "Hello"), "blob://x");
        assert_eq!(
            channel.state(),
            &GeneratedState::Ready {
                key: key("v1", "Hello"),
                url: "blob://x".to_string(),
                is_playing: true,
            }
        );
        assert!(channel.is_playing_voice(&VoiceId::new("v1")));
    }

    #[test]
    fn test_same_key_toggles() {
        let mut channel = GeneratedChannel::new();
        ready(&mut channel, key("v1", "Hello"), "blob://x");

        assert_eq!(
            channel.request(key("v1", "Hello")),
            Decision::Toggle { is_playing: false }
        );
        assert_eq!(
            channel.request(key("v1", "Hello")),
            Decision::Toggle { is_playing: true }
        );
    }

    #[test]
    fn test_whitespace_difference_is_a_new_request() {
        let mut channel = GeneratedChannel::new();
        ready(&mut channel, key("v1", "Hello"), "blob://x");

        assert_eq!(
            channel.request(key("v1", "Hello ")),
            Decision::Synthesize(key("v1", "Hello "))
        );
    }

    #[test]
    fn test_different_voice_invalidates_session() {
        let mut channel = GeneratedChannel::new();
        ready(&mut channel, key("v1", "Hello"), "blob://x");

        assert_eq!(
            channel.request(key("v2", "Hello")),
            Decision::Synthesize(key("v2", "Hello"))
        );
        assert!(!channel.is_playing());
    }

    #[test]
    fn test_failure_returns_to_idle_and_is_not_cached() {
        let mut channel = GeneratedChannel::new();
        let k = key("v1", "Hello");
        channel.request(k.clone());
        assert_eq!(channel.complete(&k, Err("boom")), Completion::Failed);
        assert_eq!(channel.state(), &GeneratedState::Idle);

        assert_eq!(channel.request(k.clone()), Decision::Synthesize(k));
    }

    #[test]
    fn test_last_request_wins() {
        let mut channel = GeneratedChannel::new();
        let first = key("v1", "Hello");
        let second = key("v2", "Hello");
        channel.request(first.clone());
        channel.request(second.clone());

        // 先发出的请求后返回，必须丢弃
        assert_eq!(
            channel.complete::<()>(&first, Ok("blob://old".to_string())),
            Completion::Stale
        );
        assert_eq!(channel.state(), &GeneratedState::Loading(second.clone()));

        assert_eq!(
            channel.complete::<()>(&second, Ok("blob://new".to_string())),
            Completion::Ready { url: "blob://new".to_string() }
        );
    }

    #[test]
    fn test_stale_failure_does_not_reset_newer_session() {
        let mut channel = GeneratedChannel::new();
        let first = key("v1", "a");
        let second = key("v1", "b");
        channel.request(first.clone());
        channel.request(second.clone());

        assert_eq!(channel.complete(&first, Err(())), Completion::Stale);
        assert!(channel.is_loading());
    }

    #[test]
    fn test_duplicate_request_while_loading() {
        let mut channel = GeneratedChannel::new();
        let k = key("v1", "Hello");
        channel.request(k.clone());
        assert_eq!(channel.request(k), Decision::AlreadyLoading);
    }

    #[test]
    fn test_ended_pauses() {
        let mut channel = GeneratedChannel::new();
        ready(&mut channel, key("v1", "Hello"), "blob://x");
        channel.ended();
        assert!(!channel.is_playing());
        // 结束后再次请求相同 key 只是重新播放
        assert_eq!(
            channel.request(key("v1", "Hello")),
            Decision::Toggle { is_playing: true }
        );
    }
}
