#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("schema setup failed: {0}")]
    SchemaFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
