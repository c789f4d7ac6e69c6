use async_trait::async_trait;
use reqwest::multipart;
use serde_json::Value;

use crate::application::ports::{
    AudioInput, SpeechToTextOutput, TranscriptionEngine, TranscriptionError,
};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_WHISPER_MODEL: &str = "whisper-1";

/// Client for `/audio/transcriptions` on OpenAI or any compatible server.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: Option<String>, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio: AudioInput<'_>,
    ) -> Result<SpeechToTextOutput, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);
        let file_name = part_file_name(audio.file_name, audio.mime_type);

        let file_part = multipart::Part::bytes(audio.data.to_vec())
            .file_name(file_name.clone())
            .mime_str(audio.mime_type.trim())
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            file_name = %file_name,
            bytes = audio.data.len(),
            "Sending audio to speech-to-text backend"
        );

        let mut request = self.client.post(&url).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("body: {}", e)))?;

        Ok(decode_transcription(&body))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// The backend picks the decoder from the extension, so the part name keeps
/// the upload's own extension or derives one from the MIME type.
fn part_file_name(file_name: &str, mime_type: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let has_extension = base.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
    });
    if has_extension {
        return base.to_string();
    }

    let stem = if base.is_empty() { "audio" } else { base };
    format!("{}.{}", stem, extension_for_mime(mime_type))
}

fn extension_for_mime(mime_type: &str) -> String {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let subtype = essence.strip_prefix("audio/").unwrap_or(&essence);

    match subtype {
        "mpeg" | "mp3" | "mpeg3" | "x-mpeg-3" => "mp3".to_string(),
        "mp4" | "x-m4a" | "m4a" | "aac" => "m4a".to_string(),
        "wav" | "wave" | "x-wav" | "vnd.wave" => "wav".to_string(),
        "x-flac" | "flac" => "flac".to_string(),
        "ogg" | "opus" => "ogg".to_string(),
        "webm" => "webm".to_string(),
        other if !other.is_empty() && other.chars().all(|c| c.is_ascii_alphanumeric()) => {
            other.to_string()
        }
        _ => "bin".to_string(),
    }
}

/// Accepts verbose JSON, plain `{"text": ...}` JSON, or a bare text body.
fn decode_transcription(body: &str) -> SpeechToTextOutput {
    let Ok(Value::Object(json)) = serde_json::from_str::<Value>(body) else {
        return SpeechToTextOutput {
            text: Some(body.trim().to_string()),
            ..Default::default()
        };
    };

    let info = json.get("transcription_info");
    let lookup = |key: &str| {
        json.get(key)
            .or_else(|| info.and_then(|i| i.get(key)))
            .filter(|v| !v.is_null())
    };

    SpeechToTextOutput {
        text: json
            .get("text")
            .and_then(Value::as_str)
            .map(|t| t.trim().to_string()),
        language: lookup("language")
            .and_then(Value::as_str)
            .map(str::to_string),
        language_confidence: lookup("language_probability")
            .and_then(Value::as_f64)
            .map(|p| p as f32),
    }
}
