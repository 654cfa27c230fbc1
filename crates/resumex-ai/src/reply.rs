//! Defensive parsing helpers for model replies.

use crate::error::{AiError, AiResult};

/// Locate the JSON object in a model reply.
///
/// Models often wrap JSON in code fences or add prose around it; take the
/// substring from the first `{` to the last `}` and parse that.
pub(crate) fn extract_json_object(reply: &str) -> AiResult<serde_json::Value> {
    let trimmed = reply.trim();
    let start = trimmed
        .find('{')
        .ok_or_else(|| AiError::MalformedReply("no JSON object in reply".to_string()))?;
    let end = trimmed
        .rfind('}')
        .ok_or_else(|| AiError::MalformedReply("unterminated JSON object".to_string()))?;
    if end < start {
        return Err(AiError::MalformedReply("unterminated JSON object".to_string()));
    }

    serde_json::from_str(&trimmed[start..=end])
        .map_err(|e| AiError::MalformedReply(e.to_string()))
}

/// Coerce a number-or-string JSON value to an integer, defaulting to 0 when
/// the value is present but unparsable.
pub(crate) fn coerce_years(value: &serde_json::Value) -> u32 {
    match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0) as u32,
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
