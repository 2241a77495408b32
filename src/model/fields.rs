//! Optional-field accessors for loosely structured JSON documents.
//!
//! Session files come from an external tool and any field may be missing or
//! carry an unexpected type. Every lookup goes through these helpers so the
//! fallback for each shape is declared once instead of inline at each read.

use serde_json::Value;

/// Follow a path of object keys, returning `None` at the first missing key
/// or non-object step.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Coerce a value to a finite number.
///
/// Numbers are taken as-is, numeric strings are parsed. Everything else
/// (missing, `null`, booleans, objects, non-numeric or non-finite text)
/// yields `0.0`.
pub fn number_or_zero(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Read a value as display text.
///
/// Strings are returned verbatim and numbers are stringified; anything else is empty.
pub fn text_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Like [`text_or_empty`], but `None` for empty text so callers can chain a fallback.
pub fn non_empty_text(value: Option<&Value>) -> Option<String> {
    let text = text_or_empty(value);
    (!text.is_empty()).then_some(text)
}

/// Borrow a value as an array, treating anything else as empty.
pub fn array_or_empty(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Loose truthiness: `null`, `false`, `0`, and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
