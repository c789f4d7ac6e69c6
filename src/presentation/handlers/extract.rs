use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::domain::ExtractionResult;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::error::{bad_request, internal_error};

#[derive(Debug, Deserialize)]
pub struct ExtractFeaturesRequest {
    pub transcription: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFeaturesResponse {
    pub success: bool,
    pub feature_requests: ExtractionResult,
}

/// Runs extraction on an existing transcription. Nothing is persisted.
#[tracing::instrument(skip(state, payload))]
pub async fn extract_features_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractFeaturesRequest>, JsonRejection>,
) -> Response {
    let transcription = match payload {
        Ok(Json(ExtractFeaturesRequest {
            transcription: Some(transcription),
        })) => transcription,
        Ok(_) => {
            tracing::warn!("Extraction request without transcription");
            return bad_request("Transcription text is required");
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed extraction request");
            return bad_request("Transcription text is required");
        }
    };

    tracing::debug!(transcription = %preview_text(&transcription), "Extracting features from text");

    let service = Arc::clone(&state.extraction_service);
    let task =
        tokio::spawn(async move { service.extract(&transcription).await }.in_current_span());

    match task.await {
        Ok(feature_requests) => (
            StatusCode::OK,
            Json(ExtractFeaturesResponse {
                success: true,
                feature_requests,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Feature extraction task failed");
            internal_error("Failed to extract features", e)
        }
    }
}
