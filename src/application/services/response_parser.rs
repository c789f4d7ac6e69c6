//! Decoding of the free-text model answer into feature request records.
//!
//! Models wrap their JSON in prose or code fences, so the answer is first
//! narrowed to a brace-delimited span by a [`JsonSpanLocator`] and only
//! that span is decoded. Decoding is field-by-field: a wrong type in one
//! field drops that field, not the whole answer. Every array item yields
//! one record, and string fields are kept exactly as the model wrote them.

use serde_json::{Map, Value};

use crate::domain::{Category, FeatureRequestRecord, Priority};

pub trait JsonSpanLocator: Send + Sync {
    fn locate<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// First `{` to last `}`.
///
/// Two sibling objects in one answer are merged into a single, usually
/// invalid, span. Kept as the default since it tolerates truncated
/// trailing prose.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBraceLocator;

impl JsonSpanLocator for GreedyBraceLocator {
    fn locate<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&text[start..=end])
    }
}

/// First balanced object, ignoring braces inside JSON strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedBraceLocator;

impl JsonSpanLocator for BalancedBraceLocator {
    fn locate<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (offset, c) in text[start..].char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }

            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[start..=start + offset]);
                    }
                }
                _ => {}
            }
        }

        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no JSON object found in model response")]
    NoJsonSpan,
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("JSON value is not an object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExtraction {
    pub requests: Vec<FeatureRequestRecord>,
    pub summary: Option<String>,
}

pub fn parse_extraction(
    text: &str,
    locator: &dyn JsonSpanLocator,
) -> Result<ParsedExtraction, ParseError> {
    let span = locator.locate(text).ok_or(ParseError::NoJsonSpan)?;
    let value: Value = serde_json::from_str(span)?;
    let object = value.as_object().ok_or(ParseError::NotAnObject)?;

    let requests = object
        .get("requests")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| match item.as_object() {
                    Some(fields) => decode_record(index, fields),
                    None => FeatureRequestRecord::new(fallback_id(index)),
                })
                .collect()
        })
        .unwrap_or_default();

    let summary = object
        .get("summary")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(ParsedExtraction { requests, summary })
}

fn fallback_id(index: usize) -> String {
    format!("request-{}", index + 1)
}

fn decode_record(index: usize, item: &Map<String, Value>) -> FeatureRequestRecord {
    let id = match item.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => fallback_id(index),
    };

    FeatureRequestRecord {
        id,
        title: string_field(item, "title"),
        description: string_field(item, "description"),
        priority: string_field(item, "priority").map(Priority::from),
        category: string_field(item, "category").map(Category::from),
        confidence: confidence_field(item),
        potential_recommendation: recommendation_field(item),
    }
}

fn string_field(item: &Map<String, Value>, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

fn confidence_field(item: &Map<String, Value>) -> Option<f64> {
    let raw = match item.get("confidence")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    raw.is_finite().then(|| raw.clamp(0.0, 1.0))
}

/// Lists of suggestions are joined one per line.
fn recommendation_field(item: &Map<String, Value>) -> Option<String> {
    match item.get("potentialRecommendation")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(parts) => {
            let lines: Vec<String> = parts
                .iter()
                .filter_map(|part| match part {
                    Value::String(s) => Some(s.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            Some(lines.join("\n"))
        }
        _ => None,
    }
}
