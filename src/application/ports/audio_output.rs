//! Audio Output Port - 播放器句柄抽象
//!
//! 对应前端页面上的一个音频元素；宿主（浏览器、终端、测试）提供实现

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Failed to load audio source: {0}")]
    Load(String),

    #[error("Playback rejected: {0}")]
    Rejected(String),
}

/// 单个音频元素
pub trait AudioOutput: Send {
    /// 绑定新的音频源，旧的音频源被丢弃
    fn set_source(&mut self, url: &str);

    /// 解除音频源绑定
    fn clear_source(&mut self);

    /// 当前绑定的音频源
    fn source(&self) -> Option<&str>;

    fn play(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self);
}

/// 创建音频元素：目录刷新时为每个试听片段创建一个，合成通道一个（无初始音频源）
pub trait AudioOutputFactory: Send + Sync {
    fn create(&self, source: Option<&str>) -> Box<dyn AudioOutput>;
}
