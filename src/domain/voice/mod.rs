//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 上游音色目录的数据模型
//! - 过滤维度 (Facet) 定义

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Voice, VoiceLabels};
pub use errors::VoiceError;
pub use value_objects::{Facet, VoiceId};

#[cfg(test)]
pub(crate) use aggregate::fixtures;
