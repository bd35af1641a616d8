//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（语音服务、对象存储、密钥、前端 API、音频输出）
//! - commands: CQRS 命令及处理器（文本合成）
//! - queries: CQRS 查询及处理器（音色目录）
//! - browser: 前端过滤与播放控制器
//! - error: 应用层错误定义

pub mod browser;
pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    handlers::{SynthesizeSpeechHandler, MISSING_SYNTHESIS_CREDENTIALS_MESSAGE},
    SynthesizeSpeech, SynthesizeSpeechResponse,
};

pub use error::ApplicationError;

pub use ports::{
    Access, ApiClientError, AudioError, AudioOutput, AudioOutputFactory, BlobInfo,
    BlobStoreError, BlobStorePort, CredentialsPort, ProviderError, PutOptions,
    SpeechSynthesisPort, SynthesisRequest, SynthesizedAudio, VoiceApiPort, VoiceCatalogPort,
};

pub use queries::{
    handlers::{ListVoicesHandler, MISSING_SPEECH_KEY_MESSAGE},
    ListVoices,
};
