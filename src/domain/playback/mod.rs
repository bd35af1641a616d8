//! Playback Context - 双通道播放状态机
//!
//! 两个通道互相独立：试听通道与合成音频通道可以同时播放，
//! 互斥只在各自通道内部成立。

mod generated;
mod preview;

pub use generated::{Completion, Decision, GeneratedChannel, GeneratedState, PlaybackKey};
pub use preview::{PreviewChannel, PreviewEffect, PreviewState};
