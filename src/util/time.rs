//! Timestamp normalisation and formatting helpers.
//!
//! Every source encoding is converted into the canonical instant,
//! `DateTime<Utc>` at microsecond precision, so that sinks never need to
//! know where a timestamp came from.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use crate::util::constants::COCOA_EPOCH_UNIX_SECS;
use crate::util::error::{invalid_timestamp, Result};

const MICROS_PER_SEC: i64 = 1_000_000;

/// Convert a Cocoa timestamp (floating-point seconds since
/// 2001-01-01T00:00:00Z) into a UTC instant.
///
/// Sub-microsecond digits are rounded to the nearest microsecond.
///
/// # Errors
/// Returns [`crate::util::error::TimelineSleuthError::InvalidTimestamp`]
/// for NaN, infinities and values outside chrono's representable range.
pub fn cocoa_to_utc(field: &str, seconds: f64) -> Result<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(invalid_timestamp(field, format!("non-finite value {seconds}")));
    }

    let micros = (seconds * MICROS_PER_SEC as f64).round();
    // i64::MAX as f64 rounds up, so compare strictly below it.
    if micros >= i64::MAX as f64 || micros <= i64::MIN as f64 {
        return Err(invalid_timestamp(field, format!("{seconds} is out of range")));
    }

    (micros as i64)
        .checked_add(COCOA_EPOCH_UNIX_SECS * MICROS_PER_SEC)
        .and_then(DateTime::from_timestamp_micros)
        .ok_or_else(|| invalid_timestamp(field, format!("{seconds} is out of range")))
}

/// Convert a platform-native date (as decoded from a property list) into a
/// UTC instant, truncated to microseconds.
///
/// Dates before 1970 are handled through the negative branch of
/// `duration_since`.
pub fn system_time_to_utc(field: &str, time: SystemTime) -> Result<DateTime<Utc>> {
    let micros: Option<i64> = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_micros()).ok(),
        Err(before) => i64::try_from(before.duration().as_micros())
            .ok()
            .map(|m| -m),
    };

    micros
        .and_then(DateTime::from_timestamp_micros)
        .ok_or_else(|| invalid_timestamp(field, "date is out of range"))
}

/// Format an instant for timeline output.
///
/// Always UTC with microsecond precision, e.g.
/// `2024-01-15T10:23:45.123456Z`, so that repeated runs produce identical
/// bytes regardless of the host time zone.
pub fn format_timeline_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Format a `std::time::Duration` into a human-readable string.
///
/// Used in the run summary to show elapsed time.
/// Examples: `0.3s`, `1.2s`, `45.6s`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cocoa_zero_is_reference_date() {
        let ts = cocoa_to_utc("start", 0.0).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_cocoa_keeps_microseconds() {
        let ts = cocoa_to_utc("start", 1.000_001).unwrap();
        assert_eq!(ts.timestamp_subsec_micros(), 1);
    }

    #[test]
    fn test_cocoa_rejects_nan() {
        assert!(cocoa_to_utc("start", f64::NAN).is_err());
        assert!(cocoa_to_utc("start", f64::INFINITY).is_err());
    }

    #[test]
    fn test_cocoa_rejects_out_of_range() {
        assert!(cocoa_to_utc("start", 1e300).is_err());
    }

    #[test]
    fn test_system_time_before_epoch() {
        let t = UNIX_EPOCH - std::time::Duration::from_secs(86_400);
        let ts = system_time_to_utc("CreationDate", t).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_format_duration_millis() {
        let d = std::time::Duration::from_millis(5);
        let s = format_duration(d);
        assert!(s.contains("ms"), "Expected ms, got: {s}");
    }
}
