//! JSON export of timeline events.
//!
//! [`JsonLinesSink`] streams one [`TimelineRow`] object per line;
//! [`export_json`] writes a finished slice as a pretty-printed array.

use std::io::Write;
use std::path::Path;

use crate::core::emitter::EventSink;
use crate::core::event::{TimelineRow, TimestampedEvent};
use crate::util::error::{sink_err, Result, TimelineSleuthError};

/// [`EventSink`] writing JSON lines to any writer.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn accept(&mut self, event: TimestampedEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &event.to_row()).map_err(sink_err)?;
        self.writer.write_all(b"\n").map_err(sink_err)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(sink_err)
    }
}

/// Export the given events to a JSON file at `path`.
///
/// Output is a pretty-printed JSON array of timeline rows.
///
/// # Errors
/// Returns [`TimelineSleuthError::Export`] if the file cannot be created or written.
pub fn export_json(events: &[TimestampedEvent], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| TimelineSleuthError::Export(format!("Failed to create JSON file: {e}")))?;

    let rows: Vec<TimelineRow<'_>> = events.iter().map(TimestampedEvent::to_row).collect();
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &rows)
        .map_err(|e| TimelineSleuthError::Export(format!("Failed to write JSON: {e}")))?;

    // Explicit flush so I/O errors are not silently swallowed by BufWriter::drop.
    writer
        .flush()
        .map_err(|e| TimelineSleuthError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!("Exported {} events to JSON: {}", events.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{AccountConfiguration, EventData, TimeLabel};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    #[test]
    fn test_one_object_per_line_with_flattened_data() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let data = Arc::new(EventData::AppleAccount(AccountConfiguration {
            key: "alice".into(),
            root: "/Accounts".into(),
            first_name: "<FirstName>".into(),
            last_name: "<LastName>".into(),
        }));
        for (secs, label) in [(100, TimeLabel::Configured), (200, TimeLabel::Validated)] {
            sink.accept(TimestampedEvent {
                artifact: Arc::from("accounts.plist"),
                data: Arc::clone(&data),
                timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
                label,
            })
            .unwrap();
        }
        sink.finish().unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["data_type"], "plist:apple_account");
        assert_eq!(lines[0]["label"], "configured");
        assert_eq!(lines[0]["key"], "alice");
        assert_eq!(lines[1]["timestamp"], "1970-01-01T00:03:20.000000Z");
        assert_eq!(
            lines[1]["description"],
            "Last validation Apple account alice (<FirstName> <LastName>)"
        );
    }
}
