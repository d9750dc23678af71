//! Helper functions and utilities
//!
//! Defensive accessors for backend payloads. The backend owns the shape of
//! its JSON; callers fall back to placeholders instead of failing.

use serde_json::Value;

/// Shown for any missing display field
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when a member has no assigned trainer
pub const NO_TRAINER_ASSIGNED: &str = "No trainer assigned yet.";

/// Shown when a member has no workout plan
pub const NO_WORKOUT_PLAN: &str = "No workout plan assigned yet.";

/// Strip the `{"message": ..., "data": ...}` envelope some endpoints use.
///
/// Returns `None` for null, empty objects and empty arrays.
pub fn unwrap_envelope(body: Value) -> Option<Value> {
    let inner = match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    };
    if is_blank(&inner) {
        None
    } else {
        Some(inner)
    }
}

/// Whether a payload has nothing to display
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Interpret a payload as a list, falling back to empty
pub fn as_list(body: Value) -> Vec<Value> {
    match unwrap_envelope(body) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Read a display string at a dotted path, or `"N/A"`
pub fn display_field(value: &Value, path: &str) -> String {
    lookup(value, path)
        .and_then(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Read a count at a dotted path, or zero
pub fn count_field(value: &Value, path: &str) -> u64 {
    lookup(value, path)
        .and_then(|v| v.as_u64().or_else(|| v.as_str().and_then(|s| s.parse().ok())))
        .unwrap_or(0)
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| current.get(segment))
}

/// Minimal shape check before sending credentials: `local@domain`.
///
/// Single-label domains such as `localhost` are accepted; the backend does
/// the real validation.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
