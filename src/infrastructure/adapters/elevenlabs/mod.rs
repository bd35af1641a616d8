//! ElevenLabs 语音服务适配器

mod client;

pub use client::{ElevenLabsClient, ElevenLabsConfig};
