use voxtract::domain::{
    Category, ExtractionResult, FALLBACK_REQUEST_ID, PARSE_ERROR_REQUEST_ID, PARSE_ERROR_SUMMARY,
    Priority, TranscriptionResult,
};

#[test]
fn given_parse_failure_when_building_result_then_has_single_low_confidence_record() {
    let result = ExtractionResult::parse_error(12, "gpt-4o-mini".to_string());

    assert_eq!(result.requests.len(), 1);
    let record = &result.requests[0];
    assert_eq!(record.id, PARSE_ERROR_REQUEST_ID);
    assert_eq!(record.title.as_deref(), Some("Unable to parse AI response"));
    assert_eq!(record.priority, Some(Priority::Low));
    assert_eq!(record.category, Some(Category::Improvement));
    assert_eq!(record.confidence, Some(0.1));
    assert_eq!(result.summary.as_deref(), Some(PARSE_ERROR_SUMMARY));
    assert_eq!(result.error_detail, None);
}

#[test]
fn given_backend_failure_when_building_result_then_carries_error_detail() {
    let result = ExtractionResult::fallback("timed out".to_string(), 500, "gpt-4o-mini".to_string());

    let record = &result.requests[0];
    assert_eq!(record.id, FALLBACK_REQUEST_ID);
    assert_eq!(record.priority, Some(Priority::Medium));
    assert_eq!(record.confidence, Some(0.3));
    assert_eq!(result.error_detail.as_deref(), Some("timed out"));
    assert_eq!(result.actionable_requests().count(), 0);
}

#[test]
fn given_result_when_serializing_then_uses_camel_case_and_omits_missing_error() {
    let json = serde_json::to_value(ExtractionResult::parse_error(7, "m".to_string())).unwrap();

    assert_eq!(json["extractionDurationMs"], 7);
    assert_eq!(json["modelIdentifier"], "m");
    assert!(json["requests"].is_array());
    assert!(json.get("errorDetail").is_none());

    let json =
        serde_json::to_value(ExtractionResult::fallback("boom".to_string(), 1, "m".to_string()))
            .unwrap();
    assert_eq!(json["errorDetail"], "boom");
}

#[test]
fn given_mock_transcription_when_serializing_then_reports_fixed_metadata() {
    let json = serde_json::to_value(TranscriptionResult::mock()).unwrap();

    assert_eq!(json["processingDurationMs"], 1500);
    assert_eq!(json["modelIdentifier"], "mock-transcription");
    assert_eq!(json["detectedLanguage"]["code"], "en");
}
