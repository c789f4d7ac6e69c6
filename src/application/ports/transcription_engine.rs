use async_trait::async_trait;

/// Raw speech-to-text answer. Every field is optional because backends
/// disagree on what they report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechToTextOutput {
    pub text: Option<String>,
    pub language: Option<String>,
    pub language_confidence: Option<f32>,
}

/// One recording as uploaded. Backends that infer the container format
/// from the file name need `file_name` and `mime_type` alongside the bytes.
#[derive(Debug, Clone, Copy)]
pub struct AudioInput<'a> {
    pub data: &'a [u8],
    pub file_name: &'a str,
    pub mime_type: &'a str,
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: AudioInput<'_>,
    ) -> Result<SpeechToTextOutput, TranscriptionError>;

    fn model(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("speech-to-text backend unavailable")]
    Unavailable,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("engine not configured: {0}")]
    NotConfigured(String),
}
