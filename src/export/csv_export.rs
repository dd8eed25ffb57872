//! CSV export of timeline events.
//!
//! One row per event with columns Timestamp, Label, DataType, Artifact,
//! Description. The header is written when the sink is created.

use std::io::Write;
use std::path::Path;

use crate::core::emitter::EventSink;
use crate::core::event::TimestampedEvent;
use crate::util::error::{sink_err, Result, TimelineSleuthError};
use crate::util::time::format_timeline_timestamp;

const HEADER: [&str; 5] = ["Timestamp", "Label", "DataType", "Artifact", "Description"];

/// [`EventSink`] writing CSV rows to any writer.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvSink<W> {
    /// Wrap `inner` and write the header row.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER).map_err(sink_err)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Rows written so far, excluding the header.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| sink_err(e.error()))
    }
}

impl<W: Write> EventSink for CsvSink<W> {
    fn accept(&mut self, event: TimestampedEvent) -> Result<()> {
        self.writer
            .write_record([
                format_timeline_timestamp(&event.timestamp).as_str(),
                event.label.as_str(),
                event.data.data_type(),
                &*event.artifact,
                event.description().as_str(),
            ])
            .map_err(sink_err)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(sink_err)
    }
}

/// Export the given events to a CSV file at `path`.
///
/// # Errors
/// Returns [`TimelineSleuthError::Export`] if the file cannot be created and
/// [`TimelineSleuthError::SinkFailure`] if a row cannot be written.
pub fn export_csv(events: &[TimestampedEvent], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| TimelineSleuthError::Export(format!("Failed to create CSV file: {e}")))?;
    let mut sink = CsvSink::new(std::io::BufWriter::new(file))?;
    for event in events {
        sink.accept(event.clone())?;
    }
    sink.finish()?;

    tracing::info!("Exported {} events to CSV: {}", events.len(), path.display());
    Ok(())
}
