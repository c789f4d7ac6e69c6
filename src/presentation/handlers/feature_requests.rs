use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{AudioFileId, Category, FeatureRequestRow, Priority};
use crate::presentation::state::AppState;

use super::error::internal_error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequestsResponse {
    pub success: bool,
    pub feature_requests: Vec<FeatureRequestDto>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequestDto {
    pub id: String,
    pub audio_file_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub confidence: Option<f64>,
    pub potential_recommendation: Option<String>,
    pub summary: Option<String>,
    pub created_at: String,
}

impl From<FeatureRequestRow> for FeatureRequestDto {
    fn from(row: FeatureRequestRow) -> Self {
        Self {
            id: row.id.as_uuid().to_string(),
            audio_file_id: row.audio_file_id.as_uuid().to_string(),
            title: row.title,
            description: row.description,
            priority: row.priority,
            category: row.category,
            confidence: row.confidence,
            potential_recommendation: row.potential_recommendation,
            summary: row.summary,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn feature_requests_handler(
    State(state): State<AppState>,
    Path(audio_file_id): Path<String>,
) -> Response {
    let Some(persistence) = state.persistence_service.as_ref() else {
        tracing::error!("Feature request lookup without a relational store");
        return internal_error(
            "Database not available",
            "no relational store is configured",
        );
    };

    // Ids are minted as UUIDs, anything else was never stored.
    let rows = match Uuid::parse_str(&audio_file_id) {
        Ok(uuid) => persistence
            .list_for_audio_file(AudioFileId::from_uuid(uuid))
            .await,
        Err(_) => Ok(Vec::new()),
    };

    match rows {
        Ok(rows) => {
            tracing::debug!(rows = rows.len(), "Feature requests fetched");
            (
                StatusCode::OK,
                Json(FeatureRequestsResponse {
                    success: true,
                    feature_requests: rows.into_iter().map(FeatureRequestDto::from).collect(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch feature requests");
            internal_error("Failed to fetch feature requests", e)
        }
    }
}
