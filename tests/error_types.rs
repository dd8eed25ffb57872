//! Integration tests for error type construction and display.

use timelinesleuth::util::error::{invalid_timestamp, sink_err, TimelineSleuthError};

#[test]
fn unsupported_source_names_artifact_and_reason() {
    let err = TimelineSleuthError::UnsupportedSource {
        artifact: "History.db".into(),
        reason: "schema matches no known fingerprint".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("History.db"), "Should contain artifact: {msg}");
    assert!(msg.contains("fingerprint"), "Should contain reason: {msg}");
}

#[test]
fn invalid_timestamp_names_field() {
    let msg = invalid_timestamp("ZSTARTDATE", "non-finite value NaN").to_string();
    assert!(msg.contains("ZSTARTDATE"), "Should contain field: {msg}");
    assert!(msg.contains("NaN"), "Should contain detail: {msg}");
}

#[test]
fn contained_errors_are_not_fatal() {
    let contained = [
        TimelineSleuthError::UnsupportedSource {
            artifact: "a".into(),
            reason: "b".into(),
        },
        TimelineSleuthError::UnrecognizedRecord {
            discriminant: "/device/isLocked".into(),
        },
        invalid_timestamp("end", "out of range"),
        TimelineSleuthError::FieldType {
            field: "action".into(),
            expected: "text",
            found: "blob",
        },
    ];
    for err in &contained {
        assert!(!err.is_fatal(), "{err} should be contained");
    }
}

#[test]
fn resource_errors_are_fatal() {
    assert!(sink_err("receiver closed").is_fatal());
    assert!(TimelineSleuthError::Export("disk full".into()).is_fatal());
    assert!(TimelineSleuthError::Reader {
        context: "prepare query".into(),
        detail: "duplicate column".into(),
    }
    .is_fatal());
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
    let err: TimelineSleuthError = io_err.into();
    let msg = err.to_string();
    assert!(msg.contains("no access"), "Should preserve IO error: {msg}");
    assert!(err.is_fatal());
}

#[test]
fn sqlite_error_converts() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let sqlite_err = conn.execute_batch("SELECT * FROM missing_table").unwrap_err();
    let err: TimelineSleuthError = sqlite_err.into();
    assert!(err.to_string().contains("missing_table"));
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    // Errors cross the reader thread boundary as strings, but the type
    // itself should stay thread-safe.
    assert_send_sync::<TimelineSleuthError>();
}
