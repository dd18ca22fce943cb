//! UNIX 时间戳格式化工具
//!
//! Upstream timestamps are seconds since the epoch, serialized either as JSON
//! numbers or as numeric strings. Output is always UTC.

use chrono::DateTime;
use serde_json::Value;

use super::number::{json_floor, json_number};
use super::safe::FALLBACK;

/// Output pattern, `YYYY-MM-DD HH:mm:ss`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an optional UNIX timestamp (seconds) as `YYYY-MM-DD HH:mm:ss` UTC.
///
/// Fractional seconds are floored, so `-0.5` is the last second of 1969.
/// Absent, `null`, zero, empty or non-numeric input, and values outside the
/// representable range, all yield `"N/A"`.
///
/// ```
/// use ffstalk_core::format_timestamp;
/// use serde_json::json;
///
/// assert_eq!(format_timestamp(Some(&json!(1_700_000_000))), "2023-11-14 22:13:20");
/// assert_eq!(format_timestamp(Some(&json!(0))), "N/A");
/// assert_eq!(format_timestamp(None), "N/A");
/// ```
pub fn format_timestamp(value: Option<&Value>) -> String {
    value
        // zero is checked before flooring: 0.5 is a real instant
        .filter(|v| json_number(v).is_some_and(|secs| secs != 0.0))
        .and_then(json_floor)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(
            || FALLBACK.to_string(),
            |dt| dt.format(TIMESTAMP_FORMAT).to_string(),
        )
}
