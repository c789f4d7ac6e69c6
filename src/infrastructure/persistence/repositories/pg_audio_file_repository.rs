use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{AudioFileRepository, RepositoryError};
use crate::domain::AudioFile;
use crate::infrastructure::persistence::schema::ensure_schema;

pub struct PgAudioFileRepository {
    pool: PgPool,
}

impl PgAudioFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AudioFileRepository for PgAudioFileRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        ensure_schema(&self.pool).await
    }

    #[instrument(skip(self, audio_file), fields(audio_file_id = %audio_file.id.as_uuid()))]
    async fn create(&self, audio_file: &AudioFile) -> Result<(), RepositoryError> {
        let file_size = i64::try_from(audio_file.file_size_bytes)
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO audio_files (id, file_name, file_size_bytes, mime_type, storage_key, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(audio_file.id.as_uuid())
        .bind(&audio_file.file_name)
        .bind(file_size)
        .bind(&audio_file.mime_type)
        .bind(audio_file.storage_key.as_ref().map(|k| k.as_str()))
        .bind(audio_file.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
