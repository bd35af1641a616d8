//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Voice Context: 音色数据模型
//! - Catalog Context: 维度索引与过滤
//! - Playback Context: 试听 / 合成双通道状态机

pub mod catalog;
pub mod playback;
pub mod voice;
