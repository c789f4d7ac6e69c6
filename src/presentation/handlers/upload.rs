use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::Instrument;

use crate::application::services::{AudioUpload, SubmissionOutcome};
use crate::domain::{DetectedLanguage, ExtractionResult, is_audio_mime};
use crate::presentation::state::AppState;

use super::error::{bad_request, internal_error};

pub const AUDIO_FIELD: &str = "audio";
const UNKNOWN: &str = "unknown";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub audio_info: AudioInfo,
    pub ai_features: AiFeatures,
}

/// Signal properties are reported as `"unknown"`; the audio is never decoded.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioInfo {
    pub id: String,
    pub file_name: String,
    pub file_size: u64,
    pub mime_type: String,
    pub storage_key: Option<String>,
    pub uploaded_at: String,
    pub duration: &'static str,
    pub sample_rate: &'static str,
    pub channels: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFeatures {
    pub transcription: String,
    pub detected_language: Option<DetectedLanguage>,
    pub processing_duration_ms: u64,
    pub model: String,
    pub feature_requests: ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SubmissionOutcome> for UploadResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        let audio_file = outcome.audio_file;
        let analysis = outcome.analysis;

        Self {
            success: true,
            audio_info: AudioInfo {
                id: audio_file.id.as_uuid().to_string(),
                file_name: audio_file.file_name,
                file_size: audio_file.file_size_bytes,
                mime_type: audio_file.mime_type,
                storage_key: audio_file.storage_key.map(|k| k.as_str().to_string()),
                uploaded_at: audio_file.created_at.to_rfc3339(),
                duration: UNKNOWN,
                sample_rate: UNKNOWN,
                channels: UNKNOWN,
            },
            ai_features: AiFeatures {
                transcription: analysis.transcription.text,
                detected_language: analysis.transcription.detected_language,
                processing_duration_ms: analysis.transcription.processing_duration_ms,
                model: analysis.transcription.model_identifier,
                feature_requests: analysis.feature_requests,
                error: analysis.error,
            },
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let upload = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Upload request without an audio field");
                return bad_request("No audio file provided");
            }
            Err(e) => return multipart_failure(&state, e),
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("audio").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        if !is_audio_mime(&mime_type) {
            tracing::warn!(mime_type = %mime_type, "Rejected non-audio upload");
            return bad_request("File must be an audio file");
        }

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => return multipart_failure(&state, e),
        };

        break AudioUpload {
            file_name,
            mime_type,
            data,
        };
    };

    if upload.data.len() > state.upload.max_file_size_bytes() {
        tracing::warn!(bytes = upload.data.len(), "Rejected oversized upload");
        return too_large(&state);
    }

    tracing::debug!(
        file_name = %upload.file_name,
        mime_type = %upload.mime_type,
        bytes = upload.data.len(),
        "Audio upload accepted"
    );

    let service = Arc::clone(&state.submission_service);
    let task = tokio::spawn(async move { service.submit(upload).await }.in_current_span());

    match task.await {
        Ok(outcome) => {
            tracing::info!(
                audio_file_id = %outcome.audio_file.id.as_uuid(),
                requests = outcome.analysis.feature_requests.requests.len(),
                "Audio processed"
            );
            (StatusCode::OK, Json(UploadResponse::from(outcome))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Audio processing task failed");
            internal_error("Failed to process audio file", e)
        }
    }
}

fn too_large(state: &AppState) -> Response {
    bad_request(format!(
        "File size must be less than {}MB",
        state.upload.max_file_size_mb
    ))
}

fn multipart_failure(state: &AppState, error: MultipartError) -> Response {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %error, "Upload exceeded the body limit");
        return too_large(state);
    }

    tracing::error!(error = %error, "Failed to read multipart upload");
    internal_error("Failed to process audio file", error.body_text())
}
