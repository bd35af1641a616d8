//! HTTP Routes
//!
//! API Endpoints:
//! - /api/get-voices      GET   获取语音服务的全部音色
//! - /api/text-to-speech  POST  合成语音并写入对象存储，返回公开 URL
//! - /api/ping            GET   健康检查
//!
//! 其它方法统一返回 405 + `{message}`

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/get-voices",
            get(handlers::get_voices).fallback(handlers::method_not_allowed),
        )
        .route(
            "/text-to-speech",
            post(handlers::text_to_speech).fallback(handlers::method_not_allowed),
        )
}
