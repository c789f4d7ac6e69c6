use async_trait::async_trait;

use crate::domain::{AudioFileId, FeatureRequestRow};

use super::RepositoryError;

#[async_trait]
pub trait FeatureRequestRepository: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;

    async fn create_many(&self, rows: &[FeatureRequestRow]) -> Result<(), RepositoryError>;

    async fn list_by_audio_file(
        &self,
        audio_file_id: AudioFileId,
    ) -> Result<Vec<FeatureRequestRow>, RepositoryError>;
}
