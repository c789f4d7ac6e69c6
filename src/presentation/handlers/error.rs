use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Body of every 4xx answer.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of every 500 answer.
#[derive(Debug, Serialize)]
pub struct DetailedErrorResponse {
    pub error: String,
    pub details: String,
}

pub(super) fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub(super) fn internal_error(message: impl Into<String>, details: impl Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(DetailedErrorResponse {
            error: message.into(),
            details: details.to_string(),
        }),
    )
        .into_response()
}
