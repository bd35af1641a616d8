//! Text-to-speech HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::SynthesizeSpeech;
use crate::domain::voice::VoiceId;
use crate::infrastructure::http::dto::{TextToSpeechRequest, TextToSpeechResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/text-to-speech
///
/// 副作用：删除对象存储中已有的所有音频，再写入新音频
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TextToSpeechRequest>, JsonRejection>,
) -> Result<Json<TextToSpeechResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let command = SynthesizeSpeech {
        voice_id: VoiceId::new(req.voice_id),
        text: req.text,
    };

    let result = state.synthesize_speech_handler.handle(command).await?;

    Ok(Json(TextToSpeechResponse { url: result.url }))
}
