use voxtract::application::services::{
    BalancedBraceLocator, GreedyBraceLocator, JsonSpanLocator, ParseError, parse_extraction,
};
use voxtract::domain::{Category, FeatureRequestRecord, Priority};

#[test]
fn given_json_wrapped_in_prose_when_locating_greedily_then_returns_brace_span() {
    let text = "Sure! ```json\n{\"requests\": [], \"summary\": \"none\"}\n``` Hope it helps.";

    let span = GreedyBraceLocator.locate(text);

    assert_eq!(span, Some("{\"requests\": [], \"summary\": \"none\"}"));
}

#[test]
fn given_two_sibling_objects_when_locating_greedily_then_span_covers_both() {
    let text = r#"{"a": 1} and also {"b": 2}"#;

    let span = GreedyBraceLocator.locate(text);

    assert_eq!(span, Some(text));
}

#[test]
fn given_two_sibling_objects_when_locating_balanced_then_returns_first_object() {
    let text = r#"{"a": 1} and also {"b": 2}"#;

    let span = BalancedBraceLocator.locate(text);

    assert_eq!(span, Some(r#"{"a": 1}"#));
}

#[test]
fn given_braces_inside_strings_when_locating_balanced_then_ignores_them() {
    let text = r#"answer: {"summary": "use {curly} \"quoted\" braces", "requests": []} trailing }"#;

    let span = BalancedBraceLocator.locate(text);

    assert_eq!(
        span,
        Some(r#"{"summary": "use {curly} \"quoted\" braces", "requests": []}"#)
    );
}

#[test]
fn given_text_without_braces_when_locating_then_returns_none() {
    assert_eq!(GreedyBraceLocator.locate("no json here"), None);
    assert_eq!(BalancedBraceLocator.locate("no json here"), None);
    assert_eq!(GreedyBraceLocator.locate("} backwards {"), None);
}

#[test]
fn given_no_brace_span_when_parsing_then_returns_no_json_span_error() {
    let result = parse_extraction("I could not find any requests.", &GreedyBraceLocator);

    assert!(matches!(result, Err(ParseError::NoJsonSpan)));
}

#[test]
fn given_sibling_objects_when_parsing_greedily_then_returns_invalid_json_error() {
    let result = parse_extraction(r#"{"requests": []} {"summary": "x"}"#, &GreedyBraceLocator);

    assert!(matches!(result, Err(ParseError::InvalidJson(_))));
}

#[test]
fn given_valid_items_when_parsing_then_preserves_count_and_fields() {
    let text = r#"{
        "requests": [
            {"id": "1", "title": "Add dark mode", "priority": "high", "category": "new-feature", "confidence": 0.8},
            {"id": "2", "title": "Fix login crash", "priority": "medium", "category": "bug-fix", "confidence": 0.6},
            {"id": "3", "title": "Faster search", "priority": "low", "category": "improvement", "confidence": 0.4}
        ],
        "summary": "Three requests"
    }"#;

    let parsed = parse_extraction(text, &GreedyBraceLocator).unwrap();

    assert_eq!(parsed.requests.len(), 3);
    assert_eq!(parsed.summary.as_deref(), Some("Three requests"));
    assert_eq!(parsed.requests[1].title.as_deref(), Some("Fix login crash"));
    assert_eq!(parsed.requests[1].priority, Some(Priority::Medium));
    assert_eq!(parsed.requests[1].category, Some(Category::BugFix));
    assert_eq!(parsed.requests[2].confidence, Some(0.4));
}

#[test]
fn given_loosely_typed_items_when_parsing_then_keeps_one_record_per_item() {
    let text = r#"{"requests": [
        "not an object",
        {"title": "Export to CSV", "priority": "URGENT", "category": "Enhancement",
         "confidence": "1.7", "potentialRecommendation": ["Add a button", "Stream rows"]},
        {"id": 7, "title": "Offline mode", "confidence": -2}
    ]}"#;

    let parsed = parse_extraction(text, &GreedyBraceLocator).unwrap();

    assert_eq!(parsed.requests.len(), 3);
    assert_eq!(parsed.requests[0], FeatureRequestRecord::new("request-1"));

    let export = &parsed.requests[1];
    assert_eq!(export.id, "request-2");
    assert_eq!(export.priority, Some(Priority::Other("URGENT".to_string())));
    assert_eq!(export.category, Some(Category::Other("Enhancement".to_string())));
    assert_eq!(export.confidence, Some(1.0));
    assert_eq!(
        export.potential_recommendation.as_deref(),
        Some("Add a button\nStream rows")
    );

    let offline = &parsed.requests[2];
    assert_eq!(offline.id, "7");
    assert_eq!(offline.confidence, Some(0.0));
    assert_eq!(parsed.summary, None);
}

#[test]
fn given_off_vocabulary_labels_when_parsing_then_preserves_them_verbatim() {
    let text = r#"{"requests": [
        {"title": "A", "priority": "High", "category": "Feature"},
        {"title": "B", "priority": "critical", "category": "ux"},
        "C as bare string"
    ]}"#;

    let parsed = parse_extraction(text, &GreedyBraceLocator).unwrap();

    assert_eq!(parsed.requests.len(), 3);
    let json = serde_json::to_value(&parsed.requests).unwrap();
    assert_eq!(json[0]["title"], "A");
    assert_eq!(json[0]["priority"], "High");
    assert_eq!(json[0]["category"], "Feature");
    assert_eq!(json[1]["priority"], "critical");
    assert_eq!(json[1]["category"], "ux");
    assert_eq!(json[2]["id"], "request-3");
    assert!(json[2]["title"].is_null());
}

#[test]
fn given_object_without_requests_when_parsing_then_requests_are_empty() {
    let parsed = parse_extraction(r#"{"summary": "nothing requested"}"#, &BalancedBraceLocator)
        .unwrap();

    assert!(parsed.requests.is_empty());
    assert_eq!(parsed.summary.as_deref(), Some("nothing requested"));
}
