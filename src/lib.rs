//! voxdeck - 音色目录浏览与语音合成
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice: 音色数据模型与过滤维度
//! - Catalog: 维度取值索引与过滤选择
//! - Playback: 试听通道与合成音频通道状态机
//!
//! 应用层 (application/):
//! - Ports: 语音服务、对象存储、密钥、前端 API、音频输出
//! - Commands / Queries: 服务端用例
//! - Browser: 前端过滤、播放与合成编排
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API、静态文件托管
//! - Adapters: ElevenLabs、Vercel Blob、本地目录存储、环境变量密钥、API 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
