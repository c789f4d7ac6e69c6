use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;

use voxtract::application::ports::{
    AudioStore, AudioStoreError, ChatPrompt, GenerationOutput, GenerationParams, LlmClient,
    AudioInput, LlmClientError, SpeechToTextOutput, TranscriptionEngine, TranscriptionError,
};
use voxtract::domain::StorageKey;

pub const STUB_WHISPER_MODEL: &str = "stub-whisper";
pub const STUB_CHAT_MODEL: &str = "stub-chat";

pub struct StubTranscriptionEngine {
    outcome: Result<SpeechToTextOutput, String>,
    calls: AtomicUsize,
    last_input: Mutex<Option<(String, String)>>,
}

impl StubTranscriptionEngine {
    pub fn returning(text: &str) -> Self {
        Self {
            outcome: Ok(SpeechToTextOutput {
                text: Some(text.to_string()),
                language: Some("en".to_string()),
                language_confidence: Some(0.98),
            }),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// File name and MIME type of the last recording received.
    pub fn last_input(&self) -> Option<(String, String)> {
        self.last_input.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for StubTranscriptionEngine {
    async fn transcribe(
        &self,
        audio: AudioInput<'_>,
    ) -> Result<SpeechToTextOutput, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() =
            Some((audio.file_name.to_string(), audio.mime_type.to_string()));
        self.outcome
            .clone()
            .map_err(TranscriptionError::ApiRequestFailed)
    }

    fn model(&self) -> &str {
        STUB_WHISPER_MODEL
    }
}

pub struct StubLlmClient {
    outcome: Result<GenerationOutput, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<ChatPrompt>>,
    last_params: Mutex<Option<GenerationParams>>,
}

impl StubLlmClient {
    /// Answers in the chat-style `text` field.
    pub fn answering(text: &str) -> Self {
        Self::with_output(GenerationOutput {
            response: None,
            text: Some(text.to_string()),
        })
    }

    pub fn with_output(output: GenerationOutput) -> Self {
        Self {
            outcome: Ok(output),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_params: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_params: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<ChatPrompt> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_params(&self) -> Option<GenerationParams> {
        *self.last_params.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlmClient {
    async fn generate(
        &self,
        prompt: &ChatPrompt,
        params: &GenerationParams,
    ) -> Result<GenerationOutput, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.clone());
        *self.last_params.lock().unwrap() = Some(*params);
        self.outcome.clone().map_err(LlmClientError::ApiRequestFailed)
    }

    fn model(&self) -> &str {
        STUB_CHAT_MODEL
    }
}

/// Panics inside `generate`, standing in for an unexpected pipeline failure.
pub struct PanickingLlmClient;

#[async_trait::async_trait]
impl LlmClient for PanickingLlmClient {
    async fn generate(
        &self,
        _prompt: &ChatPrompt,
        _params: &GenerationParams,
    ) -> Result<GenerationOutput, LlmClientError> {
        panic!("boom")
    }

    fn model(&self) -> &str {
        STUB_CHAT_MODEL
    }
}

pub struct FailingAudioStore;

#[async_trait::async_trait]
impl AudioStore for FailingAudioStore {
    async fn put(
        &self,
        _key: &StorageKey,
        _data: Bytes,
        _content_type: &str,
    ) -> Result<u64, AudioStoreError> {
        Err(AudioStoreError::UploadFailed("bucket unreachable".to_string()))
    }
}
