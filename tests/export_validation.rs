//! Integration tests for export pre-flight validation and one-shot exports.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::TimeZone;
use timelinesleuth::core::event::{ApplicationActivity, EventData, TimeLabel, TimestampedEvent};
use timelinesleuth::export::csv_export::export_csv;
use timelinesleuth::export::json_export::export_json;
use timelinesleuth::export::validate_output_path;

fn events() -> Vec<TimestampedEvent> {
    let data = Arc::new(EventData::Application(ApplicationActivity {
        bundle_identifier: Some("com.apple.Terminal".into()),
        duration: Some(12.5),
    }));
    [TimeLabel::Start, TimeLabel::End]
        .into_iter()
        .enumerate()
        .map(|(i, label)| TimestampedEvent {
            artifact: Arc::from("knowledgeC.db"),
            data: Arc::clone(&data),
            timestamp: chrono::Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, i as u32).unwrap(),
            label,
        })
        .collect()
}

#[test]
fn validate_output_path_valid_directory() {
    let path = std::env::temp_dir().join("timelinesleuth_test_export.csv");
    let result = validate_output_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_output_path_nonexistent_directory() {
    let path = PathBuf::from("/nonexistent_dir_12345/output.csv");
    let msg = validate_output_path(&path).unwrap_err().to_string();
    assert!(msg.contains("does not exist"), "Should indicate dir missing: {msg}");
}

#[test]
fn export_csv_writes_header_and_rows() {
    let path = std::env::temp_dir().join(format!("timelinesleuth_export_{}.csv", std::process::id()));
    export_csv(&events(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Timestamp,Label,DataType,Artifact,Description");
    assert!(lines[2].starts_with("2024-01-15T10:00:01.000000Z,end,mac:knowledgec:application"));
    assert!(lines[2].ends_with("Application com.apple.Terminal executed for 12.5 seconds"));
}

#[test]
fn export_json_writes_an_array() {
    let path = std::env::temp_dir().join(format!("timelinesleuth_export_{}.json", std::process::id()));
    export_json(&events(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["label"], "start");
    assert_eq!(rows[0]["bundle_identifier"], "com.apple.Terminal");
    assert_eq!(rows[1]["duration"], 12.5);
}
