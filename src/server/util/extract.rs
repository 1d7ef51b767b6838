//! Best-effort extraction of JSON objects from agent replies.
//!
//! Agents answer in free text that usually, but not always, carries a JSON object.
//! Extraction never fails: when nothing can be decoded, the input comes back unchanged
//! and the caller stores or returns it as-is.

use serde_json::Value;

/// Produces structured data from a reply value.
///
/// - Structured input (object, array, number, ...) is returned unchanged.
/// - Text is decoded as JSON in full; failing that, the span between the first `{` and
///   the last `}` is decoded; failing that, the original text is returned.
///
/// # Arguments
/// - `value` - Reply content, either a JSON-encoded string or already-structured data
///
/// # Returns
/// - `Value` - The decoded value, or `value` itself when nothing could be decoded
pub fn extract_object(value: Value) -> Value {
    let Value::String(text) = value else {
        return value;
    };

    if let Ok(parsed) = serde_json::from_str::<Value>(&text) {
        return parsed;
    }

    match bracket_scan(&text) {
        Some(parsed) => parsed,
        None => {
            tracing::debug!("No JSON object found in agent reply, returning text unchanged");
            Value::String(text)
        }
    }
}

/// Decodes the span from the first `{` to the last `}` of `text`.
///
/// Braces are not balanced: a string holding several top-level objects captures the
/// span across all of them, which fails to decode and yields `None`.
///
/// # Returns
/// - `Some(Value)` - The captured span decoded as JSON
/// - `None` - Either brace is missing, they are out of order, or the span is not JSON
pub fn bracket_scan(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&text[start..=end]).ok()
}
