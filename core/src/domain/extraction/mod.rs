//! Recovery of a JSON object from free-form provider text.
//!
//! Providers are told to answer with JSON only, yet they regularly wrap the
//! object in prose or markdown fences. Recovery is two-staged: first the span
//! between the first `{` and the last `}`, then the whole text. A brace inside
//! a string value that unbalances that span cannot be recovered from.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no JSON object could be recovered from provider text: {reason}")]
pub struct ExtractionFailure {
    pub reason: String,
}

/// Returns the JSON object embedded in `text`.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractionFailure> {
    if let Some(candidate) = brace_span(text) {
        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(object)) => return Ok(object),
            Ok(_) => {}
            Err(e) => tracing::debug!("Brace-delimited span is not valid JSON: {}", e),
        }
    }

    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(ExtractionFailure {
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
        Err(e) => Err(ExtractionFailure {
            reason: e.to_string(),
        }),
    }
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
