//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    BlobStorePort, CredentialsPort, ListVoicesHandler, SpeechSynthesisPort,
    SynthesizeSpeechHandler, VoiceCatalogPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub credentials: Arc<dyn CredentialsPort>,

    // ========== Command Handlers ==========
    pub synthesize_speech_handler: SynthesizeSpeechHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        credentials: Arc<dyn CredentialsPort>,
        catalog: Arc<dyn VoiceCatalogPort>,
        synthesizer: Arc<dyn SpeechSynthesisPort>,
        blob_store: Arc<dyn BlobStorePort>,
    ) -> Self {
        Self {
            credentials: credentials.clone(),
            synthesize_speech_handler: SynthesizeSpeechHandler::new(
                credentials.clone(),
                synthesizer,
                blob_store,
            ),
            list_voices_handler: ListVoicesHandler::new(credentials, catalog),
        }
    }
}
