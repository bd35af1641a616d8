//! Ping Handler
//!
//! 健康检查，同时报告密钥是否已配置（不返回密钥本身）

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

#[derive(Serialize)]
pub struct CredentialStatus {
    pub speech_api_key: bool,
    pub blob_token: bool,
}

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub credentials: CredentialStatus,
}

/// GET /api/ping
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        credentials: CredentialStatus {
            speech_api_key: state.credentials.speech_api_key().is_some(),
            blob_token: state.credentials.blob_token().is_some(),
        },
    })
}
