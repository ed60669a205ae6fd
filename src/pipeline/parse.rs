//! Parse-and-validate boundary for oracle output.
//!
//! The oracle is instructed to return bare JSON but is not contractually
//! bound to obey. Fence markers are stripped before parsing; anything that
//! still fails to parse, or parses into the wrong shape, is rejected.
//! Malformed output is never repaired.

use serde_json::Value;

use super::error::PipelineError;

/// Strips one surrounding Markdown code fence (with optional info string,
/// e.g. ```` ```json ````) from `raw`.
///
/// Idempotent, and lossless on the fenced payload: text without fences
/// passes through unchanged apart from whitespace trimming.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string up to the first newline.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Cleans `raw` and parses it into a JSON object.
pub fn parse_object(raw: &str) -> Result<Value, PipelineError> {
    let value: Value = serde_json::from_str(strip_code_fences(raw))?;
    if !value.is_object() {
        return Err(PipelineError::Schema(
            "expected a JSON object".to_string(),
        ));
    }
    Ok(value)
}

/// Extracts `key` from `object` as an array of strings.
pub fn string_array(object: &Value, key: &str) -> Result<Vec<String>, PipelineError> {
    array_field(object, key)?
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                PipelineError::Schema(format!("'{key}' contains a non-string element"))
            })
        })
        .collect()
}

/// Extracts `key` from `object` as an array of integers.
pub fn integer_array(object: &Value, key: &str) -> Result<Vec<i64>, PipelineError> {
    array_field(object, key)?
        .iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| {
                PipelineError::Schema(format!("'{key}' contains a non-integer element"))
            })
        })
        .collect()
}

fn array_field<'a>(object: &'a Value, key: &str) -> Result<&'a Vec<Value>, PipelineError> {
    let field = object
        .get(key)
        .ok_or_else(|| PipelineError::Schema(format!("missing '{key}' field")))?;
    field
        .as_array()
        .ok_or_else(|| PipelineError::Schema(format!("'{key}' is not an array")))
}
