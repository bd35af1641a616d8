//! 测试用端口实现

use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::application::ports::{
    ApiClientError, AudioError, AudioOutput, AudioOutputFactory, BlobInfo, BlobStoreError,
    BlobStorePort, CredentialsPort, ProviderError, PutOptions, SpeechSynthesisPort,
    SynthesisRequest, SynthesizedAudio, VoiceApiPort, VoiceCatalogPort,
};
use crate::domain::voice::{Voice, VoiceId};

/// 外部调用的预设结果
#[derive(Debug, Clone)]
pub enum Outcome {
    Ok,
    Upstream(u16, String),
    Transport,
}

impl Outcome {
    fn into_error(self) -> Option<ProviderError> {
        match self {
            Outcome::Ok => None,
            Outcome::Upstream(status, body) => Some(ProviderError::Upstream { status, body }),
            Outcome::Transport => Some(ProviderError::Transport("connection refused".to_string())),
        }
    }
}

pub struct FakeCredentials {
    pub speech: Option<String>,
    pub blob: Option<String>,
}

impl FakeCredentials {
    pub fn all() -> Self {
        Self {
            speech: Some("xi-test-key".to_string()),
            blob: Some("blob-test-token".to_string()),
        }
    }

    pub fn none() -> Self {
        Self {
            speech: None,
            blob: None,
        }
    }
}

impl CredentialsPort for FakeCredentials {
    fn speech_api_key(&self) -> Option<String> {
        self.speech.clone()
    }

    fn blob_token(&self) -> Option<String> {
        self.blob.clone()
    }
}

pub struct FakeCatalog {
    voices: Vec<Voice>,
    outcome: Outcome,
    calls: AtomicUsize,
    keys: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self::with_outcome(voices, Outcome::Ok)
    }

    pub fn with_outcome(voices: Vec<Voice>, outcome: Outcome) -> Self {
        Self {
            voices,
            outcome,
            calls: AtomicUsize::new(0),
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoiceCatalogPort for FakeCatalog {
    async fn list_voices(&self, api_key: &str) -> Result<Vec<Voice>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().unwrap().push(api_key.to_string());
        match self.outcome.clone().into_error() {
            Some(err) => Err(err),
            None => Ok(self.voices.clone()),
        }
    }
}

pub struct FakeSynthesizer {
    outcome: Outcome,
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl FakeSynthesizer {
    pub fn new() -> Self {
        Self::with_outcome(Outcome::Ok)
    }

    pub fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesisPort for FakeSynthesizer {
    async fn synthesize(
        &self,
        _api_key: &str,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, ProviderError> {
        self.requests.lock().unwrap().push(request);
        match self.outcome.clone().into_error() {
            Some(err) => Err(err),
            None => Ok(SynthesizedAudio {
                data: b"ID3fake-mpeg".to_vec(),
                content_type: "audio/mpeg".to_string(),
            }),
        }
    }
}

/// 内存对象存储，记录调用顺序
pub struct InMemoryBlobStore {
    blobs: Mutex<Vec<BlobInfo>>,
    ops: Mutex<Vec<String>>,
    fail_put: bool,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: Mutex::new(Vec::new()),
            ops: Mutex::new(Vec::new()),
            fail_put: false,
        }
    }

    pub fn failing_put() -> Self {
        Self {
            fail_put: true,
            ..Self::new()
        }
    }

    pub fn seed(&self, pathname: &str) {
        self.blobs.lock().unwrap().push(BlobInfo {
            url: format!("https://blob.test/{}", pathname),
            pathname: pathname.to_string(),
            size: 1,
            uploaded_at: None,
        });
    }

    pub fn pathnames(&self) -> Vec<String> {
        self.blobs
            .lock()
            .unwrap()
            .iter()
            .map(|b| b.pathname.clone())
            .collect()
    }

    pub fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStorePort for InMemoryBlobStore {
    async fn list(&self, _token: &str) -> Result<Vec<BlobInfo>, BlobStoreError> {
        self.ops.lock().unwrap().push("list".to_string());
        Ok(self.blobs.lock().unwrap().clone())
    }

    async fn delete(&self, _token: &str, urls: &[String]) -> Result<(), BlobStoreError> {
        self.ops.lock().unwrap().push(format!("delete:{}", urls.len()));
        self.blobs.lock().unwrap().retain(|b| !urls.contains(&b.url));
        Ok(())
    }

    async fn put(
        &self,
        _token: &str,
        pathname: &str,
        data: Vec<u8>,
        _options: PutOptions,
    ) -> Result<BlobInfo, BlobStoreError> {
        self.ops.lock().unwrap().push("put".to_string());
        if self.fail_put {
            return Err(BlobStoreError::Transport("blob store unreachable".to_string()));
        }
        let info = BlobInfo {
            url: format!("https://blob.test/{}", pathname),
            pathname: pathname.to_string(),
            size: data.len() as u64,
            uploaded_at: None,
        };
        self.blobs.lock().unwrap().push(info.clone());
        Ok(info)
    }
}

/// 所有音频元素共享的操作日志，用于断言跨元素的执行顺序
pub type AudioLog = Arc<Mutex<Vec<String>>>;

pub struct RecordingAudio {
    name: String,
    source: Option<String>,
    log: AudioLog,
    fail_play: bool,
}

impl RecordingAudio {
    pub fn new(name: &str, log: AudioLog) -> Self {
        Self {
            name: name.to_string(),
            source: None,
            log,
            fail_play: false,
        }
    }

    pub fn failing(name: &str, log: AudioLog) -> Self {
        Self {
            fail_play: true,
            ..Self::new(name, log)
        }
    }
}

impl AudioOutput for RecordingAudio {
    fn set_source(&mut self, url: &str) {
        self.log
            .lock()
            .unwrap()
            .push(format!("source:{}:{}", self.name, url));
        self.source = Some(url.to_string());
    }

    fn clear_source(&mut self) {
        self.source = None;
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn play(&mut self) -> Result<(), AudioError> {
        if self.fail_play {
            self.log.lock().unwrap().push(format!("error:{}", self.name));
            return Err(AudioError::Load(format!("{} unavailable", self.name)));
        }
        self.log.lock().unwrap().push(format!("play:{}", self.name));
        Ok(())
    }

    fn pause(&mut self) {
        self.log.lock().unwrap().push(format!("pause:{}", self.name));
    }
}

/// 以 URL 的文件名（去掉扩展名）命名音频元素；无音频源时命名为 generated
pub struct RecordingAudioFactory {
    pub log: AudioLog,
    failing: HashSet<String>,
}

impl RecordingAudioFactory {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            failing: HashSet::new(),
        }
    }

    pub fn failing(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|n| n.to_string()).collect(),
            ..Self::new()
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }
}

impl AudioOutputFactory for RecordingAudioFactory {
    fn create(&self, source: Option<&str>) -> Box<dyn AudioOutput> {
        let name = source
            .and_then(|url| url.rsplit('/').next())
            .map(|file| file.split('.').next().unwrap_or(file).to_string())
            .unwrap_or_else(|| "generated".to_string());
        if self.failing.contains(&name) {
            Box::new(RecordingAudio::failing(&name, self.log.clone()))
        } else {
            Box::new(RecordingAudio::new(&name, self.log.clone()))
        }
    }
}

/// 前端 API 的假实现；合成结果按队列依次返回，队列为空时返回 blob://<n>
pub struct FakeVoiceApi {
    voices: Result<Vec<Voice>, (u16, String)>,
    tts_failures: Mutex<VecDeque<bool>>,
    catalog_calls: AtomicUsize,
    tts_requests: Mutex<Vec<(VoiceId, String)>>,
}

impl FakeVoiceApi {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices: Ok(voices),
            tts_failures: Mutex::new(VecDeque::new()),
            catalog_calls: AtomicUsize::new(0),
            tts_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_catalog(status: u16, message: &str) -> Self {
        Self {
            voices: Err((status, message.to_string())),
            ..Self::new(Vec::new())
        }
    }

    /// 下一次合成失败
    pub fn fail_next_tts(&self) {
        self.tts_failures.lock().unwrap().push_back(true);
    }

    pub fn tts_calls(&self) -> usize {
        self.tts_requests.lock().unwrap().len()
    }

    pub fn tts_requests(&self) -> Vec<(VoiceId, String)> {
        self.tts_requests.lock().unwrap().clone()
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VoiceApiPort for FakeVoiceApi {
    async fn get_voices(&self) -> Result<Vec<Voice>, ApiClientError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        match &self.voices {
            Ok(voices) => Ok(voices.clone()),
            Err((status, message)) => Err(ApiClientError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    async fn text_to_speech(
        &self,
        voice_id: &VoiceId,
        text: &str,
    ) -> Result<String, ApiClientError> {
        let n = {
            let mut requests = self.tts_requests.lock().unwrap();
            requests.push((voice_id.clone(), text.to_string()));
            requests.len()
        };
        let fail = self.tts_failures.lock().unwrap().pop_front().unwrap_or(false);
        if fail {
            return Err(ApiClientError::Status {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }
        Ok(format!("blob://{}", n))
    }
}
