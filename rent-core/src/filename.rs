use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// `2025-01-01T14:00:00.123Z` with `:` and `.` swapped for `-`.
pub fn file_stamp(at: DateTime<Utc>) -> String {
    iso_millis(at).replace([':', '.'], "-")
}

/// ISO-8601 UTC instant with millisecond precision, as written into `createdAt`.
pub fn iso_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Replace everything outside `[A-Za-z0-9]` with `_`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Pick the filename seed from `payload[seed_field]`, falling back to `default`
/// when the field is absent, empty or not a string.
pub fn seed_from(payload: &Value, seed_field: &str, default: &str) -> String {
    match payload.get(seed_field).and_then(Value::as_str) {
        Some(name) if !name.is_empty() => sanitize(name),
        _ => sanitize(default),
    }
}

pub fn submission_file_name(at: DateTime<Utc>, seed: &str) -> String {
    format!("{}_{}.json", file_stamp(at), seed)
}
