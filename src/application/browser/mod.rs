//! 前端控制器
//!
//! 过滤状态、双通道播放与合成请求编排。
//! 音频元素与服务端 API 都通过端口注入，宿主可以是浏览器、终端或测试。

mod filter;
mod orchestrator;
mod playback;
mod session;

pub use filter::FilterController;
pub use orchestrator::{PendingSynthesis, PlayOutcome, SynthesisOrchestrator, SynthesisResult};
pub use playback::PlaybackController;
pub use session::BrowserSession;
