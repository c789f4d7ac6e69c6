use std::sync::Arc;

use crate::application::ports::{AudioFileRepository, FeatureRequestRepository, RepositoryError};
use crate::domain::{AudioFile, AudioFileId, ExtractionResult, FeatureRequestRow};

/// Writes upload metadata and extracted feature requests to the
/// relational store.
pub struct FeaturePersistenceService {
    audio_file_repository: Arc<dyn AudioFileRepository>,
    feature_request_repository: Arc<dyn FeatureRequestRepository>,
}

impl FeaturePersistenceService {
    pub fn new(
        audio_file_repository: Arc<dyn AudioFileRepository>,
        feature_request_repository: Arc<dyn FeatureRequestRepository>,
    ) -> Self {
        Self {
            audio_file_repository,
            feature_request_repository,
        }
    }

    #[tracing::instrument(skip(self, audio_file), fields(audio_file_id = %audio_file.id.as_uuid()))]
    pub async fn record_audio_file(&self, audio_file: &AudioFile) -> Result<(), RepositoryError> {
        self.audio_file_repository.ensure_schema().await?;
        self.audio_file_repository.create(audio_file).await
    }

    /// Returns the number of rows written.
    #[tracing::instrument(skip(self, extraction), fields(audio_file_id = %audio_file_id.as_uuid()))]
    pub async fn persist_extraction(
        &self,
        audio_file_id: AudioFileId,
        extraction: &ExtractionResult,
    ) -> Result<usize, RepositoryError> {
        let rows = rows_for_extraction(audio_file_id, extraction);

        self.feature_request_repository.ensure_schema().await?;
        self.feature_request_repository.create_many(&rows).await?;

        tracing::debug!(rows = rows.len(), "Feature requests persisted");
        Ok(rows.len())
    }

    #[tracing::instrument(skip(self), fields(audio_file_id = %audio_file_id.as_uuid()))]
    pub async fn list_for_audio_file(
        &self,
        audio_file_id: AudioFileId,
    ) -> Result<Vec<FeatureRequestRow>, RepositoryError> {
        self.feature_request_repository.ensure_schema().await?;
        self.feature_request_repository
            .list_by_audio_file(audio_file_id)
            .await
    }
}

/// One row per actionable record, or a single summary-only placeholder
/// when nothing is actionable.
pub fn rows_for_extraction(
    audio_file_id: AudioFileId,
    extraction: &ExtractionResult,
) -> Vec<FeatureRequestRow> {
    let rows: Vec<FeatureRequestRow> = extraction
        .actionable_requests()
        .map(|record| FeatureRequestRow::from_record(audio_file_id, record, extraction.summary.clone()))
        .collect();

    if rows.is_empty() {
        vec![FeatureRequestRow::placeholder(
            audio_file_id,
            extraction.summary.clone(),
        )]
    } else {
        rows
    }
}
