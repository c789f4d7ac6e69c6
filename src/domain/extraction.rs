use serde::Serialize;

use super::{Category, FeatureRequestRecord, Priority};

pub const PARSE_ERROR_REQUEST_ID: &str = "parse-error-1";
pub const PARSE_ERROR_SUMMARY: &str = "Error in processing AI response";
pub const FALLBACK_REQUEST_ID: &str = "fallback-1";
pub const FALLBACK_SUMMARY: &str = "Feature extraction failed - using fallback response";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub requests: Vec<FeatureRequestRecord>,
    pub summary: Option<String>,
    pub extraction_duration_ms: u64,
    pub model_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl ExtractionResult {
    /// The model answered but its output could not be decoded.
    pub fn parse_error(extraction_duration_ms: u64, model_identifier: String) -> Self {
        let record = FeatureRequestRecord::new(PARSE_ERROR_REQUEST_ID)
            .with_title("Unable to parse AI response")
            .with_description("The language model returned a response that could not be read as a feature request list.")
            .with_priority(Priority::Low)
            .with_category(Category::Improvement)
            .with_confidence(0.1)
            .with_potential_recommendation(
                "Try the request again or record clearer audio describing the feature.",
            );

        Self {
            requests: vec![record],
            summary: Some(PARSE_ERROR_SUMMARY.to_string()),
            extraction_duration_ms,
            model_identifier,
            error_detail: None,
        }
    }

    /// The model could not be reached at all.
    pub fn fallback(
        error_detail: String,
        extraction_duration_ms: u64,
        model_identifier: String,
    ) -> Self {
        let record = FeatureRequestRecord::new(FALLBACK_REQUEST_ID)
            .with_title("[Fallback] Feature extraction failed")
            .with_description(
                "The language model service was unavailable, so no feature requests were extracted.",
            )
            .with_priority(Priority::Medium)
            .with_category(Category::Improvement)
            .with_confidence(0.3)
            .with_potential_recommendation(
                "Check the language model configuration and submit the recording again.",
            );

        Self {
            requests: vec![record],
            summary: Some(FALLBACK_SUMMARY.to_string()),
            extraction_duration_ms,
            model_identifier,
            error_detail: Some(error_detail),
        }
    }

    pub fn actionable_requests(&self) -> impl Iterator<Item = &FeatureRequestRecord> {
        self.requests.iter().filter(|r| r.is_actionable())
    }
}
