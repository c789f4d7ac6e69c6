use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::RepositoryError;

const UNIQUE_VIOLATION: &str = "23505";
const DUPLICATE_TABLE: &str = "42P07";
const DUPLICATE_OBJECT: &str = "42710";

const SCHEMA_STATEMENTS: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS audio_files (
        id UUID PRIMARY KEY,
        file_name TEXT NOT NULL,
        file_size_bytes BIGINT NOT NULL,
        mime_type TEXT NOT NULL,
        storage_key TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS feature_requests (
        id UUID PRIMARY KEY,
        audio_file_id UUID NOT NULL REFERENCES audio_files(id) ON DELETE CASCADE,
        position INTEGER NOT NULL DEFAULT 0,
        title TEXT,
        description TEXT,
        priority TEXT,
        category TEXT,
        confidence DOUBLE PRECISION,
        potential_recommendation TEXT,
        summary TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_feature_requests_audio_file_id
        ON feature_requests (audio_file_id)
    "#,
];

/// Creates `audio_files` and `feature_requests` when absent.
///
/// `IF NOT EXISTS` is not atomic in Postgres: two sessions creating the
/// same table can still collide on the catalog, so those errors count as
/// success.
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), RepositoryError> {
    for statement in SCHEMA_STATEMENTS {
        match sqlx::query(statement).execute(pool).await {
            Ok(_) => {}
            Err(e) if is_concurrent_create(&e) => {
                tracing::debug!(error = %e, "Schema object created concurrently");
            }
            Err(e) => return Err(RepositoryError::SchemaFailed(e.to_string())),
        }
    }
    Ok(())
}

fn is_concurrent_create(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => matches!(
            db.code().as_deref(),
            Some(UNIQUE_VIOLATION | DUPLICATE_TABLE | DUPLICATE_OBJECT)
        ),
        _ => false,
    }
}
