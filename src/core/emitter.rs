//! Event fan-out.
//!
//! [`Emitter`] turns one [`EventData`] plus its candidate timestamps into
//! timeline events, hands them synchronously to an [`EventSink`], and routes
//! contained failures to the diagnostic channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::core::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::event::{EventData, TimeLabel, TimestampedEvent};
use crate::util::error::{invalid_timestamp, Result, TimelineSleuthError};
use crate::util::time::{cocoa_to_utc, system_time_to_utc};

/// Receiver of timeline events. One call per event, in emission order.
///
/// Errors returned by a sink are fatal for the artifact being processed;
/// the engine never retries.
pub trait EventSink {
    fn accept(&mut self, event: TimestampedEvent) -> Result<()>;

    /// Flush buffered output. Called once after the last artifact.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl EventSink for Vec<TimestampedEvent> {
    fn accept(&mut self, event: TimestampedEvent) -> Result<()> {
        self.push(event);
        Ok(())
    }
}

/// A labelled timestamp that may or may not produce an event.
///
/// `Ok(None)` means the source value was absent (or zero) and the event is
/// silently suppressed; a contained `Err` suppresses the event and is
/// reported, a fatal one halts the artifact.
#[derive(Debug)]
pub struct TimeCandidate {
    pub label: TimeLabel,
    pub value: Result<Option<DateTime<Utc>>>,
}

impl TimeCandidate {
    /// Candidate from a Cocoa seconds column. Zero counts as absent.
    pub fn from_cocoa(label: TimeLabel, field: &str, raw: Result<Option<f64>>) -> Self {
        let value = match raw {
            Ok(Some(seconds)) if seconds != 0.0 => cocoa_to_utc(field, seconds).map(Some),
            Ok(_) => Ok(None),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => Err(invalid_timestamp(field, e.to_string())),
        };
        Self { label, value }
    }

    /// Candidate from a platform-native date leaf.
    pub fn from_date(label: TimeLabel, field: &str, raw: Result<Option<SystemTime>>) -> Self {
        let value = match raw {
            Ok(Some(time)) => system_time_to_utc(field, time).map(Some),
            Ok(None) => Ok(None),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => Err(invalid_timestamp(field, e.to_string())),
        };
        Self { label, value }
    }
}

/// Per-artifact emission context.
pub struct Emitter<'a> {
    artifact: Arc<str>,
    sink: &'a mut dyn EventSink,
    diagnostics: &'a mut dyn DiagnosticSink,
    cancel: Option<&'a AtomicBool>,
    events: usize,
    reported: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(
        artifact: Arc<str>,
        sink: &'a mut dyn EventSink,
        diagnostics: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            artifact,
            sink,
            diagnostics,
            cancel: None,
            events: 0,
            reported: 0,
        }
    }

    /// Attach a cooperative cancellation flag, checked at record boundaries.
    pub fn with_cancel(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn artifact(&self) -> &Arc<str> {
        &self.artifact
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|c| c.load(Ordering::Relaxed))
    }

    /// Number of events handed to the sink so far.
    pub fn events_emitted(&self) -> usize {
        self.events
    }

    /// Number of diagnostics reported so far.
    pub fn diagnostics_reported(&self) -> usize {
        self.reported
    }

    /// Report a contained failure, or give a fatal one back to the caller.
    pub fn contain(&mut self, error: TimelineSleuthError) -> Result<()> {
        match Diagnostic::from_error(&self.artifact, &error) {
            Some(diagnostic) => {
                diagnostic.log();
                self.diagnostics.report(diagnostic);
                self.reported += 1;
                Ok(())
            }
            None => Err(error),
        }
    }

    /// Emit one event per usable candidate, ordered by label.
    ///
    /// Returns the number of events emitted. Absent timestamps produce
    /// nothing; invalid ones are reported and skipped without affecting the
    /// other candidates.
    ///
    /// # Errors
    /// Propagates the first sink failure. Events already accepted stay
    /// accepted.
    pub fn emit(
        &mut self,
        data: EventData,
        candidates: impl IntoIterator<Item = TimeCandidate>,
    ) -> Result<usize> {
        let data = Arc::new(data);
        let mut candidates: Vec<TimeCandidate> = candidates.into_iter().collect();
        candidates.sort_by_key(|c| c.label);

        let mut emitted = 0usize;
        for candidate in candidates {
            match candidate.value {
                Ok(Some(timestamp)) => {
                    self.sink.accept(TimestampedEvent {
                        artifact: Arc::clone(&self.artifact),
                        data: Arc::clone(&data),
                        timestamp,
                        label: candidate.label,
                    })?;
                    emitted += 1;
                    self.events += 1;
                }
                Ok(None) => {
                    tracing::trace!("{}: no {} timestamp", self.artifact, candidate.label);
                }
                Err(e) => self.contain(e)?,
            }
        }

        Ok(emitted)
    }
}
