//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("未知的过滤维度: {0}")]
    UnknownFacet(String),
}
