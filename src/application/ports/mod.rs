mod audio_file_repository;
mod audio_store;
mod feature_request_repository;
mod llm_client;
mod repository_error;
mod transcription_engine;

pub use audio_file_repository::AudioFileRepository;
pub use audio_store::{AudioStore, AudioStoreError};
pub use feature_request_repository::FeatureRequestRepository;
pub use llm_client::{ChatPrompt, GenerationOutput, GenerationParams, LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use transcription_engine::{
    AudioInput, SpeechToTextOutput, TranscriptionEngine, TranscriptionError,
};
