mod pg_pool;
mod repositories;
mod schema;

pub use pg_pool::create_pool;
pub use repositories::{
    InMemoryAudioFileRepository, InMemoryFeatureRequestRepository, PgAudioFileRepository,
    PgFeatureRequestRepository,
};
pub use schema::ensure_schema;
