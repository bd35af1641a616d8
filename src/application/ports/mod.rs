//! Application Ports - 端口定义
//!
//! 定义应用层与基础设施层的抽象接口
//!
//! 服务端出站端口: VoiceCatalogPort, SpeechSynthesisPort, BlobStorePort, CredentialsPort
//! 前端端口: VoiceApiPort, AudioOutput

mod audio_output;
mod blob_store;
mod credentials;
mod speech_provider;
mod voice_api;

pub use audio_output::{AudioError, AudioOutput, AudioOutputFactory};
pub use blob_store::{Access, BlobInfo, BlobStoreError, BlobStorePort, PutOptions};
pub use credentials::CredentialsPort;
pub use speech_provider::{
    ProviderError, SpeechSynthesisPort, SynthesisRequest, SynthesizedAudio, VoiceCatalogPort,
};
pub use voice_api::{ApiClientError, VoiceApiPort};
