//! Numeric reads from loosely typed upstream values.
//!
//! The upstream sends the same field as `55`, `55.0` or `"55"` depending on
//! the endpoint version, so every numeric read goes through here.

use serde_json::Value;

/// Numeric content of a JSON number or a numeric string.
///
/// Surrounding whitespace in strings is ignored. Non-finite results, empty
/// strings and every other JSON type give `None`.
pub fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

/// Like [`json_number`], rounded toward negative infinity.
///
/// Integers are read without a detour through `f64`, so large ids and
/// timestamps keep full precision.
pub fn json_floor(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| json_number(value).map(floor_i64)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| json_number(value).map(floor_i64)),
        _ => None,
    }
}

/// Saturates outside the `i64` range.
#[allow(clippy::cast_possible_truncation)]
fn floor_i64(f: f64) -> i64 {
    f.floor() as i64
}
