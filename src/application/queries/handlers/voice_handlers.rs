//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CredentialsPort, VoiceCatalogPort};
use crate::application::queries::ListVoices;
use crate::domain::voice::Voice;

/// 缺少 API key 时的固定提示
pub const MISSING_SPEECH_KEY_MESSAGE: &str = "Missing ELEVENLABS_API_KEY";

/// ListVoices Handler
pub struct ListVoicesHandler {
    credentials: Arc<dyn CredentialsPort>,
    catalog: Arc<dyn VoiceCatalogPort>,
}

impl ListVoicesHandler {
    pub fn new(credentials: Arc<dyn CredentialsPort>, catalog: Arc<dyn VoiceCatalogPort>) -> Self {
        Self {
            credentials,
            catalog,
        }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<Vec<Voice>, ApplicationError> {
        let api_key = self
            .credentials
            .speech_api_key()
            .ok_or_else(|| ApplicationError::missing_credential(MISSING_SPEECH_KEY_MESSAGE))?;

        let voices = self.catalog.list_voices(&api_key).await?;

        tracing::info!(count = voices.len(), "Voice catalog fetched");

        Ok(voices)
    }
}
