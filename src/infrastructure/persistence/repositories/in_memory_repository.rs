use tokio::sync::RwLock;

use crate::application::ports::{AudioFileRepository, FeatureRequestRepository, RepositoryError};
use crate::domain::{AudioFile, AudioFileId, FeatureRequestRow};

#[derive(Default)]
pub struct InMemoryAudioFileRepository {
    files: RwLock<Vec<AudioFile>>,
}

impl InMemoryAudioFileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<AudioFile> {
        self.files.read().await.clone()
    }
}

#[async_trait::async_trait]
impl AudioFileRepository for InMemoryAudioFileRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn create(&self, audio_file: &AudioFile) -> Result<(), RepositoryError> {
        self.files.write().await.push(audio_file.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryFeatureRequestRepository {
    rows: RwLock<Vec<FeatureRequestRow>>,
}

impl InMemoryFeatureRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<FeatureRequestRow> {
        self.rows.read().await.clone()
    }
}

#[async_trait::async_trait]
impl FeatureRequestRepository for InMemoryFeatureRequestRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn create_many(&self, rows: &[FeatureRequestRow]) -> Result<(), RepositoryError> {
        self.rows.write().await.extend_from_slice(rows);
        Ok(())
    }

    async fn list_by_audio_file(
        &self,
        audio_file_id: AudioFileId,
    ) -> Result<Vec<FeatureRequestRow>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.audio_file_id == audio_file_id)
            .cloned()
            .collect())
    }
}
