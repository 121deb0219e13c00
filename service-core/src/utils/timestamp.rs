use chrono::{DateTime, Utc};

/// Current UTC time as a naive ISO-8601 string, e.g. `2024-05-01T09:30:12.123456`.
pub fn utc_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Renders without an offset suffix; the fractional part is microseconds and
/// is left out when zero.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    if at.timestamp_subsec_micros() == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
