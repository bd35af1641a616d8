//! Voice API Client - 前端侧访问本服务的 HTTP 客户端
//!
//! 实现 VoiceApiPort
//!
//! GET  {base_url}/api/get-voices       -> {"voices": [...]}
//! POST {base_url}/api/text-to-speech   <- {"voiceId", "text"} -> {"url"}
//! 错误响应体为 {"message"}

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::application::ports::{ApiClientError, VoiceApiPort};
use crate::domain::voice::{Voice, VoiceId};
use crate::infrastructure::http::dto::{
    MessageResponse, TextToSpeechRequest, TextToSpeechResponse, VoicesResponse,
};

/// 本服务的 HTTP 客户端
///
/// 不设置超时、不重试：请求挂起时播放通道停留在 Loading
pub struct HttpVoiceApiClient {
    client: Client,
    base_url: String,
}

impl HttpVoiceApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// 非 2xx 响应时取 `{message}`，解析失败则用原始响应体
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.message)
            .unwrap_or(body);
        return Err(ApiClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiClientError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl VoiceApiPort for HttpVoiceApiClient {
    async fn get_voices(&self) -> Result<Vec<Voice>, ApiClientError> {
        let response = self
            .client
            .get(self.url("/api/get-voices"))
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let body: VoicesResponse = read_json(response).await?;
        tracing::debug!(count = body.voices.len(), "Voice catalog fetched");
        Ok(body.voices)
    }

    async fn text_to_speech(
        &self,
        voice_id: &VoiceId,
        text: &str,
    ) -> Result<String, ApiClientError> {
        let request = TextToSpeechRequest {
            voice_id: voice_id.as_str().to_string(),
            text: text.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/text-to-speech"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let body: TextToSpeechResponse = read_json(response).await?;
        Ok(body.url)
    }
}
