//! HTTP Error Handling
//!
//! 错误分类:
//! - MissingCredential: 500 + 固定提示
//! - Upstream: 原样转发上游状态码与响应体
//! - Transport: 500 + 通用提示，细节只写日志
//! - MethodNotAllowed: 405

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::MessageResponse;
use crate::application::ApplicationError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    MissingCredential(String),
    Upstream { status: u16, body: String },
    Transport(String),
    BadRequest(String),
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingCredential(msg) => {
                tracing::error!(error = %msg, "Missing credential");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Upstream { status, body } => {
                tracing::warn!(status = status, body = %body, "Forwarding upstream error");
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, body)
            }
            ApiError::Transport(detail) => {
                tracing::error!(error = %detail, "Error in handler");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            ),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::MissingCredential(msg) => ApiError::MissingCredential(msg),
            ApplicationError::Upstream { status, body } => ApiError::Upstream { status, body },
            ApplicationError::Transport(msg) => ApiError::Transport(msg),
            ApplicationError::Validation(msg) => ApiError::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upstream_status_is_forwarded() {
        let (status, body) = body_of(ApiError::Upstream {
            status: 422,
            body: "{\"detail\":\"text too long\"}".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "{\"detail\":\"text too long\"}");
    }

    #[tokio::test]
    async fn test_transport_detail_is_hidden() {
        let (status, body) = body_of(ApiError::Transport("dns failure at 10.0.0.1".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_invalid_upstream_status_becomes_bad_gateway() {
        let (status, _) = body_of(ApiError::Upstream {
            status: 42,
            body: String::new(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
