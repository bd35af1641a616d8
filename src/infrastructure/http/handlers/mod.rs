//! HTTP Handlers

mod ping;
mod speech;
mod voices;

pub use ping::*;
pub use speech::*;
pub use voices::*;

use super::error::ApiError;

/// 路由上未注册的方法统一返回 405 + JSON 消息
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
