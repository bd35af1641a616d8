//! Speech Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::speech_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    BlobStorePort, CredentialsPort, PutOptions, SpeechSynthesisPort, SynthesisRequest,
};

/// 缺少 API key 或存储 token 时的固定提示
pub const MISSING_SYNTHESIS_CREDENTIALS_MESSAGE: &str = "Missing API key or Vercel blob token";

/// 生成存储对象名: audio-<unix 毫秒>.mp3
pub fn clip_pathname(timestamp_millis: i64) -> String {
    format!("audio-{}.mp3", timestamp_millis)
}

/// SynthesizeSpeech Handler
///
/// 对象存储是单槽缓存：写入新音频前删除所有已有对象。
/// list -> delete -> put 不是原子操作，并发请求下最终留存哪个对象是不确定的，
/// 且没有按用户或会话隔离。
pub struct SynthesizeSpeechHandler {
    credentials: Arc<dyn CredentialsPort>,
    synthesizer: Arc<dyn SpeechSynthesisPort>,
    blob_store: Arc<dyn BlobStorePort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(
        credentials: Arc<dyn CredentialsPort>,
        synthesizer: Arc<dyn SpeechSynthesisPort>,
        blob_store: Arc<dyn BlobStorePort>,
    ) -> Self {
        Self {
            credentials,
            synthesizer,
            blob_store,
        }
    }

    pub async fn handle(
        &self,
        cmd: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let (api_key, blob_token) = match (
            self.credentials.speech_api_key(),
            self.credentials.blob_token(),
        ) {
            (Some(key), Some(token)) => (key, token),
            _ => {
                return Err(ApplicationError::missing_credential(
                    MISSING_SYNTHESIS_CREDENTIALS_MESSAGE,
                ))
            }
        };

        // voice id 会被拼进上游 URL 路径
        let voice_id = cmd.voice_id.as_str();
        if voice_id.is_empty() || voice_id.contains('/') {
            return Err(ApplicationError::validation(format!(
                "Invalid voiceId: {:?}",
                voice_id
            )));
        }

        let audio = self
            .synthesizer
            .synthesize(
                &api_key,
                SynthesisRequest {
                    voice_id: cmd.voice_id.clone(),
                    text: cmd.text.clone(),
                },
            )
            .await?;

        let existing = self.blob_store.list(&blob_token).await?;
        if !existing.is_empty() {
            let urls: Vec<String> = existing.into_iter().map(|b| b.url).collect();
            self.blob_store.delete(&blob_token, &urls).await?;
            tracing::debug!(deleted = urls.len(), "Previous clips deleted");
        }

        let pathname = clip_pathname(Utc::now().timestamp_millis());
        let size = audio.data.len();
        let blob = self
            .blob_store
            .put(
                &blob_token,
                &pathname,
                audio.data,
                PutOptions {
                    content_type: audio.content_type,
                    ..PutOptions::default()
                },
            )
            .await?;

        tracing::info!(
            voice_id = %cmd.voice_id,
            text_len = cmd.text.len(),
            audio_size = size,
            url = %blob.url,
            "Speech synthesized and stored"
        );

        Ok(SynthesizeSpeechResponse { url: blob.url })
    }
}
