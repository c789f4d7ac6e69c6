use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{FeatureRequestRepository, RepositoryError};
use crate::domain::{AudioFileId, Category, FeatureRequestId, FeatureRequestRow, Priority};
use crate::infrastructure::persistence::schema::ensure_schema;

pub struct PgFeatureRequestRepository {
    pool: PgPool,
}

impl PgFeatureRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StoredFeatureRequest {
    id: Uuid,
    audio_file_id: Uuid,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    category: Option<String>,
    confidence: Option<f64>,
    potential_recommendation: Option<String>,
    summary: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<StoredFeatureRequest> for FeatureRequestRow {
    fn from(r: StoredFeatureRequest) -> Self {
        FeatureRequestRow {
            id: FeatureRequestId::from_uuid(r.id),
            audio_file_id: AudioFileId::from_uuid(r.audio_file_id),
            title: r.title,
            description: r.description,
            priority: r.priority.map(Priority::from),
            category: r.category.map(Category::from),
            confidence: r.confidence,
            potential_recommendation: r.potential_recommendation,
            summary: r.summary,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl FeatureRequestRepository for PgFeatureRequestRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        ensure_schema(&self.pool).await
    }

    #[instrument(skip(self, rows), fields(count = rows.len()))]
    async fn create_many(&self, rows: &[FeatureRequestRow]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        for (position, row) in rows.iter().enumerate() {
            let position = i32::try_from(position)
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO feature_requests (
                    id, audio_file_id, position, title, description, priority, category,
                    confidence, potential_recommendation, summary, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(row.id.as_uuid())
            .bind(row.audio_file_id.as_uuid())
            .bind(position)
            .bind(row.title.as_deref())
            .bind(row.description.as_deref())
            .bind(row.priority.as_ref().map(Priority::as_str))
            .bind(row.category.as_ref().map(Category::as_str))
            .bind(row.confidence)
            .bind(row.potential_recommendation.as_deref())
            .bind(row.summary.as_deref())
            .bind(row.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    #[instrument(skip(self), fields(audio_file_id = %audio_file_id.as_uuid()))]
    async fn list_by_audio_file(
        &self,
        audio_file_id: AudioFileId,
    ) -> Result<Vec<FeatureRequestRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoredFeatureRequest>(
            r#"
            SELECT id, audio_file_id, title, description, priority, category,
                   confidence, potential_recommendation, summary, created_at
            FROM feature_requests
            WHERE audio_file_id = $1
            ORDER BY created_at ASC, position ASC
            "#,
        )
        .bind(audio_file_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(rows.into_iter().map(FeatureRequestRow::from).collect())
    }
}
