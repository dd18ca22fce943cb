//! Safe-value accessor.
//!
//! Every upstream field goes through [`safe`], so a missing or `null` value can
//! never leak into an [`AccountRecord`](crate::AccountRecord) as anything other
//! than its documented fallback.

use serde_json::{Number, Value};

/// Generic fallback for absent fields.
pub const FALLBACK: &str = "N/A";

/// Fallback for pet, prime level and diamond cost fields.
pub const PLACEHOLDER: &str = "-";

/// Return the string form of `value`, or `fallback` when it is absent or `null`.
///
/// ```
/// use ffstalk_core::{safe, FALLBACK};
/// use serde_json::json;
///
/// assert_eq!(safe(Some(&json!(55)), FALLBACK), "55");
/// assert_eq!(safe(Some(&json!(null)), FALLBACK), "N/A");
/// assert_eq!(safe(None, "-"), "-");
/// ```
pub fn safe(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(v) => display_value(v),
    }
}

/// String form of any JSON value.
///
/// Strings are returned without quotes and integral floats drop their `.0`.
/// Arrays are joined with `,`, objects are rendered as compact JSON. `null` becomes the literal `"null"`; callers
/// that want a fallback instead should use [`safe`].
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // null holes join as empty strings
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Number text the way the upstream's own web client prints it: integral
/// floats lose their `.0` and negative zero is `0`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
