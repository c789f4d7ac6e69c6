use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{BackendProvider, TranscriptionSettings};

use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// `Ok(None)` when transcription is switched off.
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Option<Arc<dyn TranscriptionEngine>>, TranscriptionError> {
        match settings.provider {
            BackendProvider::Disabled => Ok(None),
            BackendProvider::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| {
                        TranscriptionError::NotConfigured(
                            "api_key required for the openai provider".to_string(),
                        )
                    })?;
                let engine = OpenAiWhisperEngine::new(
                    Some(key),
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                );
                Ok(Some(Arc::new(engine)))
            }
            BackendProvider::Compatible => {
                let base_url = settings.base_url.clone().ok_or_else(|| {
                    TranscriptionError::NotConfigured(
                        "base_url required for the compatible provider".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(
                    settings.api_key.clone().filter(|k| !k.is_empty()),
                    Some(base_url),
                    Some(settings.model.clone()),
                );
                Ok(Some(Arc::new(engine)))
            }
        }
    }
}
