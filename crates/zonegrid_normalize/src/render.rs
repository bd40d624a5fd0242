#![forbid(unsafe_code)]

use serde_json::Value;

/// Total display coercion for values of ambiguous shape. Absent and null
/// values render empty, canonical-looking objects render their `name`,
/// and anything else degrades to its JSON text rather than panicking or
/// leaking a debug representation.
pub fn safe_render_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => {
            if let Some(name) = other.get("name").and_then(Value::as_str) {
                return name.to_string();
            }
            serde_json::to_string(other).unwrap_or_else(|_| "[Object]".to_string())
        }
    }
}
