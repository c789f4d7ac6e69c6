use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::{AudioInput, TranscriptionEngine, TranscriptionError};
use crate::domain::{DetectedLanguage, ExtractionResult, TranscriptionResult};
use crate::infrastructure::observability::preview_text;

use super::ExtractionService;
use super::extraction_service::elapsed_ms;

/// What the AI stages produced for one recording.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioAnalysis {
    pub transcription: TranscriptionResult,
    pub feature_requests: ExtractionResult,
    /// Set when the transcription is the mock stand-in.
    pub error: Option<String>,
}

/// First pipeline stage. Always hands some text to extraction, the mock
/// transcription when the speech-to-text backend fails.
pub struct TranscriptionService {
    engine: Option<Arc<dyn TranscriptionEngine>>,
    extraction_service: Arc<ExtractionService>,
    fallback_delay: Duration,
}

impl TranscriptionService {
    pub fn new(
        engine: Option<Arc<dyn TranscriptionEngine>>,
        extraction_service: Arc<ExtractionService>,
        fallback_delay: Duration,
    ) -> Self {
        Self {
            engine,
            extraction_service,
            fallback_delay,
        }
    }

    #[tracing::instrument(skip(self, audio), fields(bytes = audio.data.len(), mime_type = %audio.mime_type))]
    pub async fn analyze(&self, audio: AudioInput<'_>) -> AudioAnalysis {
        let (transcription, error) = match self.transcribe(audio).await {
            Ok(transcription) => {
                tracing::info!(
                    chars = transcription.text.len(),
                    duration_ms = transcription.processing_duration_ms,
                    text = %preview_text(&transcription.text),
                    "Transcription completed"
                );
                (transcription, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Transcription failed, using mock transcription");
                tokio::time::sleep(self.fallback_delay).await;
                (TranscriptionResult::mock(), Some(e.to_string()))
            }
        };

        let feature_requests = self.extraction_service.extract(&transcription.text).await;

        AudioAnalysis {
            transcription,
            feature_requests,
            error,
        }
    }

    async fn transcribe(&self, audio: AudioInput<'_>) -> Result<TranscriptionResult, TranscriptionError> {
        let engine = self.engine.as_ref().ok_or(TranscriptionError::Unavailable)?;
        let started = Instant::now();

        let output = engine.transcribe(audio).await?;

        let detected_language = output.language.map(|code| DetectedLanguage {
            code,
            confidence: output.language_confidence,
        });

        Ok(TranscriptionResult {
            text: output.text.unwrap_or_default(),
            detected_language,
            processing_duration_ms: elapsed_ms(started),
            model_identifier: engine.model().to_string(),
        })
    }
}
