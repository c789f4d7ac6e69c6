mod error;
mod extract;
mod feature_requests;
mod health;
mod upload;

pub use error::{DetailedErrorResponse, ErrorResponse};
pub use extract::{ExtractFeaturesRequest, ExtractFeaturesResponse, extract_features_handler};
pub use feature_requests::{FeatureRequestDto, FeatureRequestsResponse, feature_requests_handler};
pub use health::health_handler;
pub use upload::{AUDIO_FIELD, AiFeatures, AudioInfo, UploadResponse, upload_handler};
