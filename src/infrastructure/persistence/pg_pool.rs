use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Single connection attempt; the caller decides whether to run without
/// a database.
#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(url)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
