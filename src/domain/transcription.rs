use serde::Serialize;

pub const MOCK_TRANSCRIPTION_TEXT: &str = "This is a mock transcription. The speech-to-text service was unavailable, so no real transcription could be produced for this recording.";
const MOCK_PROCESSING_DURATION_MS: u64 = 1500;
const MOCK_LANGUAGE_CODE: &str = "en";
const MOCK_LANGUAGE_CONFIDENCE: f32 = 0.95;
const MOCK_MODEL_IDENTIFIER: &str = "mock-transcription";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedLanguage {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionResult {
    pub text: String,
    pub detected_language: Option<DetectedLanguage>,
    pub processing_duration_ms: u64,
    pub model_identifier: String,
}

impl TranscriptionResult {
    /// Stand-in used when the speech-to-text backend cannot be reached.
    pub fn mock() -> Self {
        Self {
            text: MOCK_TRANSCRIPTION_TEXT.to_string(),
            detected_language: Some(DetectedLanguage {
                code: MOCK_LANGUAGE_CODE.to_string(),
                confidence: Some(MOCK_LANGUAGE_CONFIDENCE),
            }),
            processing_duration_ms: MOCK_PROCESSING_DURATION_MS,
            model_identifier: MOCK_MODEL_IDENTIFIER.to_string(),
        }
    }
}
