//! Convert serde_json::Value to the text parameters the builder casts from.

use serde_json::Value;

/// Text form of a scalar, as PostgreSQL's input functions expect it.
/// Every placeholder is cast (`$n::type`), so binding text is enough.
pub fn text_param(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(v.to_string()),
    }
}
