use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{AudioInput, AudioStore};
use crate::domain::{AudioFile, AudioFileId, StorageKey};

use super::{AudioAnalysis, FeaturePersistenceService, TranscriptionService};

/// A validated upload: audio MIME type, within the size limit.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub audio_file: AudioFile,
    pub analysis: AudioAnalysis,
}

/// Runs one upload through storage, transcription, extraction and
/// persistence, in that order. Storage and persistence are best-effort.
pub struct AudioSubmissionService {
    transcription_service: Arc<TranscriptionService>,
    audio_store: Option<Arc<dyn AudioStore>>,
    persistence_service: Option<Arc<FeaturePersistenceService>>,
}

impl AudioSubmissionService {
    pub fn new(
        transcription_service: Arc<TranscriptionService>,
        audio_store: Option<Arc<dyn AudioStore>>,
        persistence_service: Option<Arc<FeaturePersistenceService>>,
    ) -> Self {
        Self {
            transcription_service,
            audio_store,
            persistence_service,
        }
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(file_name = %upload.file_name, mime_type = %upload.mime_type, bytes = upload.data.len())
    )]
    pub async fn submit(&self, upload: AudioUpload) -> SubmissionOutcome {
        let audio_file_id = AudioFileId::new();
        let storage_key = self.store_audio(&audio_file_id, &upload).await;

        let audio_file = AudioFile::new(
            audio_file_id,
            upload.file_name,
            upload.mime_type,
            upload.data.len() as u64,
            storage_key,
        );

        if let Some(persistence) = &self.persistence_service {
            if let Err(e) = persistence.record_audio_file(&audio_file).await {
                tracing::error!(error = %e, "Failed to record audio file metadata");
            }
        }

        let analysis = self
            .transcription_service
            .analyze(AudioInput {
                data: &upload.data,
                file_name: &audio_file.file_name,
                mime_type: &audio_file.mime_type,
            })
            .await;

        if let Some(persistence) = &self.persistence_service {
            match persistence
                .persist_extraction(audio_file.id, &analysis.feature_requests)
                .await
            {
                Ok(rows) => tracing::info!(rows, "Feature requests stored"),
                Err(e) => tracing::error!(error = %e, "Failed to store feature requests"),
            }
        } else {
            tracing::debug!("No relational store configured, skipping persistence");
        }

        SubmissionOutcome {
            audio_file,
            analysis,
        }
    }

    async fn store_audio(
        &self,
        audio_file_id: &AudioFileId,
        upload: &AudioUpload,
    ) -> Option<StorageKey> {
        let store = self.audio_store.as_ref()?;
        let key = StorageKey::new(audio_file_id, &upload.file_name);

        match store.put(&key, upload.data.clone(), &upload.mime_type).await {
            Ok(bytes) => {
                tracing::debug!(key = %key, bytes, "Audio stored");
                Some(key)
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to store audio, continuing without it");
                None
            }
        }
    }
}
