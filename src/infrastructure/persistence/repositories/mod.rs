mod in_memory_repository;
mod pg_audio_file_repository;
mod pg_feature_request_repository;

pub use in_memory_repository::{InMemoryAudioFileRepository, InMemoryFeatureRequestRepository};
pub use pg_audio_file_repository::PgAudioFileRepository;
pub use pg_feature_request_repository::PgFeatureRequestRepository;
