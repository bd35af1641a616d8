//! Environment Credentials
//!
//! 每次调用时读取环境变量；空字符串视为缺失

use crate::application::ports::CredentialsPort;

pub struct EnvCredentials {
    speech_api_key_var: String,
    blob_token_var: String,
}

impl EnvCredentials {
    pub fn new(speech_api_key_var: impl Into<String>, blob_token_var: impl Into<String>) -> Self {
        Self {
            speech_api_key_var: speech_api_key_var.into(),
            blob_token_var: blob_token_var.into(),
        }
    }

    fn read(var: &str) -> Option<String> {
        std::env::var(var).ok().filter(|v| !v.is_empty())
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new("ELEVENLABS_API_KEY", "VERCEL_BLOB_KEY")
    }
}

impl CredentialsPort for EnvCredentials {
    fn speech_api_key(&self) -> Option<String> {
        Self::read(&self.speech_api_key_var)
    }

    fn blob_token(&self) -> Option<String> {
        Self::read(&self.blob_token_var)
    }
}
