mod audio_file;
mod extraction;
mod feature_request;
mod feature_request_row;
mod storage_key;
mod transcription;

pub use audio_file::{AudioFile, AudioFileId, is_audio_mime};
pub use extraction::{
    ExtractionResult, FALLBACK_REQUEST_ID, FALLBACK_SUMMARY, PARSE_ERROR_REQUEST_ID,
    PARSE_ERROR_SUMMARY,
};
pub use feature_request::{Category, FeatureRequestRecord, Priority};
pub use feature_request_row::{FeatureRequestId, FeatureRequestRow};
pub use storage_key::StorageKey;
pub use transcription::{DetectedLanguage, MOCK_TRANSCRIPTION_TEXT, TranscriptionResult};
