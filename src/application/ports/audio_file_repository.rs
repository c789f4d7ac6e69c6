use async_trait::async_trait;

use crate::domain::AudioFile;

use super::RepositoryError;

#[async_trait]
pub trait AudioFileRepository: Send + Sync {
    /// Creates the backing tables if they are absent. Safe to call concurrently.
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;

    async fn create(&self, audio_file: &AudioFile) -> Result<(), RepositoryError>;
}
