//! ElevenLabs Client - 调用 ElevenLabs HTTP API
//!
//! 实现 VoiceCatalogPort 与 SpeechSynthesisPort
//!
//! 外部 API:
//! GET  {base_url}/v1/voices                       -> {"voices": [...]}
//! POST {base_url}/v1/text-to-speech/{voice_id}    -> audio/mpeg binary
//! 认证头: xi-api-key

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    ProviderError, SpeechSynthesisPort, SynthesisRequest, SynthesizedAudio, VoiceCatalogPort,
};
use crate::domain::voice::Voice;

const API_KEY_HEADER: &str = "xi-api-key";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TextToSpeechBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Deserialize)]
struct VoicesEnvelope {
    voices: Vec<Voice>,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 合成模型，固定值，不允许请求方指定
    pub model_id: String,
    pub stability: f32,
    pub similarity_boost: f32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            stability: 0.5,
            similarity_boost: 0.5,
            timeout_secs: 120,
        }
    }
}

impl ElevenLabsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ElevenLabs HTTP 客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsConfig,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.config.base_url.trim_end_matches('/'))
    }

    fn synthesis_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            voice_id
        )
    }

    fn voice_settings(&self) -> VoiceSettings {
        VoiceSettings {
            stability: self.config.stability,
            similarity_boost: self.config.similarity_boost,
        }
    }
}

fn map_send_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Transport("Request timeout".to_string())
    } else if e.is_connect() {
        ProviderError::Transport(format!("Cannot connect to speech service: {}", e))
    } else {
        ProviderError::Transport(e.to_string())
    }
}

/// 非 2xx 响应：保留状态码与原始响应体
async fn ensure_success(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::error!(status = status.as_u16(), body = %body, "Error from speech API");
    Err(ProviderError::Upstream {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl VoiceCatalogPort for ElevenLabsClient {
    async fn list_voices(&self, api_key: &str) -> Result<Vec<Voice>, ProviderError> {
        tracing::debug!(url = %self.voices_url(), "Fetching voice catalog");

        let response = self
            .client
            .get(self.voices_url())
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        let envelope: VoicesEnvelope = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse voices: {}", e)))?;

        Ok(envelope.voices)
    }
}

#[async_trait]
impl SpeechSynthesisPort for ElevenLabsClient {
    async fn synthesize(
        &self,
        api_key: &str,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, ProviderError> {
        let url = self.synthesis_url(request.voice_id.as_str());
        let body = TextToSpeechBody {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: self.voice_settings(),
        };

        tracing::debug!(
            url = %url,
            text_len = request.text.len(),
            model_id = %self.config.model_id,
            "Sending text-to-speech request"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .header(header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let response = ensure_success(response).await?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let data = response
            .bytes()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            voice_id = %request.voice_id,
            audio_size = data.len(),
            content_type = %content_type,
            "Text-to-speech completed"
        );

        Ok(SynthesizedAudio { data, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::VoiceId;
    use crate::infrastructure::test_support::spawn_router;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    fn client(base_url: String) -> ElevenLabsClient {
        ElevenLabsClient::new(ElevenLabsConfig::new(base_url).with_timeout(5)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = ElevenLabsConfig::default();
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.model_id, "eleven_multilingual_v2");
        assert_eq!(config.stability, 0.5);
        assert_eq!(config.similarity_boost, 0.5);
    }

    #[test]
    fn test_urls_tolerate_trailing_slash() {
        let client = client("http://example.com/".to_string());
        assert_eq!(client.voices_url(), "http://example.com/v1/voices");
        assert_eq!(
            client.synthesis_url("abc"),
            "http://example.com/v1/text-to-speech/abc"
        );
    }

    #[tokio::test]
    async fn test_list_voices_sends_key() {
        let router = Router::new().route(
            "/v1/voices",
            get(|headers: HeaderMap| async move {
                if headers.get("xi-api-key").and_then(|v| v.to_str().ok()) != Some("secret") {
                    return (StatusCode::UNAUTHORIZED, "bad key").into_response();
                }
                Json(json!({
                    "voices": [{
                        "voice_id": "v1",
                        "name": "Rachel",
                        "category": "premade",
                        "labels": {"gender": "female", "accent": "american"},
                        "preview_url": "https://cdn/v1.mp3"
                    }]
                }))
                .into_response()
            }),
        );
        let base = spawn_router(router).await;

        let voices = client(base.clone()).list_voices("secret").await.unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].labels.gender, "female");

        let err = client(base).list_voices("wrong").await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Upstream { status: 401, ref body } if body == "bad key"
        ));
    }

    #[tokio::test]
    async fn test_list_voices_tolerates_null_fields() {
        let router = Router::new().route(
            "/v1/voices",
            get(|| async {
                Json(json!({
                    "voices": [
                        {
                            "voice_id": "v1",
                            "name": "Rachel",
                            "category": "premade",
                            "labels": {"gender": "female"},
                            "preview_url": "https://cdn/v1.mp3"
                        },
                        {
                            "voice_id": "v2",
                            "name": "Cloned",
                            "category": "cloned",
                            "labels": null,
                            "preview_url": null
                        }
                    ]
                }))
            }),
        );
        let base = spawn_router(router).await;

        let voices = client(base).list_voices("secret").await.unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[1].preview_url, "");
        assert_eq!(voices[1].labels.gender, "");
    }

    #[tokio::test]
    async fn test_synthesize_sends_fixed_settings() {
        let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::new(Mutex::new(None));
        let captured = seen.clone();
        let router = Router::new().route(
            "/v1/text-to-speech/:voice_id",
            post(move |Path(voice_id): Path<String>, Json(body): Json<Value>| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = Some((voice_id, body));
                    ([(header::CONTENT_TYPE, "audio/mpeg")], vec![0xFFu8, 0xFB, 0x90])
                }
            }),
        );
        let base = spawn_router(router).await;

        let audio = client(base)
            .synthesize(
                "secret",
                SynthesisRequest {
                    voice_id: VoiceId::new("v1"),
                    text: "Hello".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(audio.data, vec![0xFF, 0xFB, 0x90]);
        assert_eq!(audio.content_type, "audio/mpeg");

        let (voice_id, body) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(voice_id, "v1");
        assert_eq!(
            body,
            json!({
                "text": "Hello",
                "model_id": "eleven_multilingual_v2",
                "voice_settings": {"stability": 0.5, "similarity_boost": 0.5}
            })
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport() {
        // 端口 1 上不会有服务
        let err = client("http://127.0.0.1:1".to_string())
            .list_voices("secret")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }
}
