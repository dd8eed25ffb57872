//! Integration tests for time utilities.

use std::time::{Duration, UNIX_EPOCH};

use chrono::TimeZone;
use timelinesleuth::util::time::{
    cocoa_to_utc, format_duration, format_timeline_timestamp, system_time_to_utc,
};

#[test]
fn format_duration_sub_second() {
    let d = Duration::from_millis(350);
    let s = format_duration(d);
    assert!(
        s.contains("0.4") || s.contains("0.3"),
        "Expected ~0.3-0.4s, got: {s}"
    );
}

#[test]
fn format_duration_seconds() {
    assert_eq!(format_duration(Duration::from_secs(5)), "5.0s");
}

#[test]
fn format_duration_minutes() {
    let s = format_duration(Duration::from_secs(90));
    assert!(s.contains("1.5m"), "Expected 1.5m, got: {s}");
}

#[test]
fn format_timeline_timestamp_is_utc_with_micros() {
    let ts = chrono::Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 0).unwrap();
    assert_eq!(format_timeline_timestamp(&ts), "2024-06-15T14:30:00.000000Z");
}

#[test]
fn cocoa_zero_is_the_cocoa_epoch() {
    let ts = cocoa_to_utc("start", 0.0).unwrap();
    assert_eq!(format_timeline_timestamp(&ts), "2001-01-01T00:00:00.000000Z");
}

#[test]
fn cocoa_fraction_keeps_microseconds() {
    let ts = cocoa_to_utc("start", 1.000_001).unwrap();
    assert_eq!(format_timeline_timestamp(&ts), "2001-01-01T00:00:01.000001Z");
}

#[test]
fn cocoa_rejects_nan_and_out_of_range() {
    assert!(cocoa_to_utc("start", f64::NAN).is_err());
    assert!(cocoa_to_utc("start", f64::INFINITY).is_err());
    assert!(cocoa_to_utc("start", 1e300).is_err());
}

#[test]
fn both_encodings_reach_the_same_instant() {
    let from_cocoa = cocoa_to_utc("start", 1000.0).unwrap();
    let native = UNIX_EPOCH + Duration::from_secs(978_307_200 + 1000);
    let from_native = system_time_to_utc("ValidationDate", native).unwrap();
    assert_eq!(from_cocoa, from_native);
}

#[test]
fn native_dates_before_1970_are_supported() {
    let native = UNIX_EPOCH - Duration::from_secs(86_400);
    let ts = system_time_to_utc("CreationDate", native).unwrap();
    assert_eq!(format_timeline_timestamp(&ts), "1969-12-31T00:00:00.000000Z");
}
