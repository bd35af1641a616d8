//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod api_client;
pub mod blob;
pub mod credentials;
pub mod elevenlabs;

pub use api_client::HttpVoiceApiClient;
pub use blob::{FileBlobStore, VercelBlobConfig, VercelBlobStore};
pub use credentials::EnvCredentials;
pub use elevenlabs::{ElevenLabsClient, ElevenLabsConfig};
