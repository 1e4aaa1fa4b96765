//! Rendering helpers for literal values that do not depend on the SQL
//! dialect.

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp and re-render it in UTC with the shortest
/// fractional second (`2024-09-17T05:00:00Z`, `2024-09-17T08:00:01.2345Z`).
///
/// Returns `None` for anything that is not a complete RFC 3339 timestamp.
/// Beyond chrono's checks this rejects a space or lowercase `t` separator,
/// a lowercase `z` zone and leap seconds.
pub fn normalize_timestamp(value: &str) -> Option<String> {
    if !matches!(value.as_bytes().get(10), Some(b'T')) || value.ends_with('z') {
        return None;
    }

    let utc = DateTime::parse_from_rfc3339(value).ok()?.with_timezone(&Utc);

    // chrono encodes second 60 as an extra second of nanoseconds
    let nanos = utc.timestamp_subsec_nanos();
    if nanos >= 1_000_000_000 {
        return None;
    }

    let mut out = utc.format("%Y-%m-%dT%H:%M:%S").to_string();
    if nanos > 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    out.push('Z');
    Some(out)
}

/// Shortest text that round-trips `value`, switching to exponent notation
/// (`1.5E+07`, `1E-05`) outside of `1e-4 <= |value| < 1e6`.
pub fn format_float(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if value == 0.0 || (-4..6).contains(&exponent) {
        return value.to_string();
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}E{}{:02}", mantissa, sign, exponent.abs())
}
