//! HTTP Middleware
//!
//! 请求结果日志。本服务的非 2xx 响应来自三处：
//! - 语音服务转发回来的上游状态码（401、422、429 等原样透传）
//! - 路由上不支持的方法（405）与请求体校验失败（400）
//! - 缺少密钥或网络故障（500）
//!
//! 5xx 记 error，4xx 记 warn，并附带耗时；上游响应体只在 ApiError 中记录。

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;

/// 按状态码分类，便于日志检索
fn classify(status: StatusCode) -> &'static str {
    match status {
        StatusCode::METHOD_NOT_ALLOWED => "method_not_allowed",
        StatusCode::BAD_REQUEST => "bad_request",
        StatusCode::INTERNAL_SERVER_ERROR => "internal",
        s if s.is_client_error() || s.is_server_error() => "upstream",
        _ => "ok",
    }
}

/// 请求结果日志中间件
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let kind = classify(status);

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), kind, elapsed_ms, "Request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), kind, elapsed_ms, "Request rejected");
    } else {
        tracing::debug!(%method, %path, status = status.as_u16(), elapsed_ms, "Request completed");
    }

    response
}
