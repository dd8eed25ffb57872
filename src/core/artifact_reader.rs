//! Background artifact reader thread.
//!
//! Processes a list of artifacts in order on a background thread. Events
//! are forwarded in batches, diagnostics one at a time, over a bounded
//! [`crossbeam_channel`]. A diagnostic first flushes the pending batch, so
//! the consumer sees both streams in emission order. The consumer drains
//! the receiving end until it sees [`ReaderMessage::Complete`].

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::Sender;

use crate::core::artifact::ArtifactReport;
use crate::core::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::emitter::EventSink;
use crate::core::event::TimestampedEvent;
use crate::core::registry::PluginRegistry;
use crate::util::constants::EVENT_BATCH_SIZE;
use crate::util::error::{sink_err, Result};

/// Messages sent from the reader thread to the consumer.
#[derive(Debug)]
pub enum ReaderMessage {
    /// A batch of events, in emission order.
    EventBatch(Vec<TimestampedEvent>),
    /// A non-fatal condition met while processing an artifact.
    Diagnostic(Diagnostic),
    /// An artifact finished (or was skipped).
    ArtifactDone(ArtifactReport),
    /// Progress update: events emitted so far and the artifact just finished.
    Progress { count: usize, artifact: String },
    /// All requested artifacts have been processed (or cancelled).
    Complete {
        total: usize,
        elapsed: std::time::Duration,
    },
    /// A fatal error for one artifact. Processing continues with the next.
    Error { artifact: String, error: String },
}

/// Events accepted but not yet sent.
pub type PendingBatch = RefCell<Vec<TimestampedEvent>>;

fn flush_pending(sender: &Sender<ReaderMessage>, pending: &PendingBatch) -> Result<()> {
    if pending.borrow().is_empty() {
        return Ok(());
    }
    let batch = pending.replace(Vec::with_capacity(EVENT_BATCH_SIZE));
    sender
        .send(ReaderMessage::EventBatch(batch))
        .map_err(|_| sink_err("event receiver disconnected"))
}

/// [`EventSink`] that batches events onto a channel.
pub struct ChannelSink<'s> {
    sender: &'s Sender<ReaderMessage>,
    pending: &'s PendingBatch,
}

impl<'s> ChannelSink<'s> {
    pub fn new(sender: &'s Sender<ReaderMessage>, pending: &'s PendingBatch) -> Self {
        Self { sender, pending }
    }
}

impl EventSink for ChannelSink<'_> {
    fn accept(&mut self, event: TimestampedEvent) -> Result<()> {
        let mut batch = self.pending.borrow_mut();
        batch.push(event);
        let full = batch.len() >= EVENT_BATCH_SIZE;
        drop(batch);
        if full {
            flush_pending(self.sender, self.pending)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        flush_pending(self.sender, self.pending)
    }
}

/// [`DiagnosticSink`] that forwards each diagnostic onto a channel, behind
/// the events emitted before it.
pub struct ChannelDiagnostics<'s> {
    sender: &'s Sender<ReaderMessage>,
    pending: &'s PendingBatch,
}

impl<'s> ChannelDiagnostics<'s> {
    pub fn new(sender: &'s Sender<ReaderMessage>, pending: &'s PendingBatch) -> Self {
        Self { sender, pending }
    }
}

impl DiagnosticSink for ChannelDiagnostics<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        // A disconnected receiver is noticed by the event sink.
        let _ = flush_pending(self.sender, self.pending);
        let _ = self.sender.send(ReaderMessage::Diagnostic(diagnostic));
    }
}

/// Spawn a background thread that processes `artifacts` with `registry`.
///
/// Set `cancel` to `true` to stop at the next record boundary.
///
/// # Errors
/// Returns the OS error if the thread cannot be spawned.
pub fn spawn_reader_thread(
    artifacts: Vec<PathBuf>,
    registry: Arc<PluginRegistry>,
    sender: Sender<ReaderMessage>,
    cancel: Arc<AtomicBool>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("artifact-reader".into())
        .spawn(move || {
            reader_thread_main(&artifacts, &registry, &sender, &cancel);
        })
}

/// Main loop of the reader thread.
fn reader_thread_main(
    artifacts: &[PathBuf],
    registry: &PluginRegistry,
    sender: &Sender<ReaderMessage>,
    cancel: &AtomicBool,
) {
    let start = Instant::now();
    let mut total = 0usize;

    for path in artifacts {
        if cancel.load(Ordering::Relaxed) {
            break;
        }

        let artifact = path.display().to_string();
        let pending = PendingBatch::default();
        let mut sink = ChannelSink::new(sender, &pending);
        let mut diagnostics = ChannelDiagnostics::new(sender, &pending);
        let outcome = registry.process_artifact(path, &mut sink, &mut diagnostics, Some(cancel));

        // Events emitted before a fatal error stay valid.
        if sink.finish().is_err() {
            tracing::warn!("Consumer disconnected; stopping reader");
            return;
        }

        match outcome {
            Ok(report) => {
                total += report.events;
                let _ = sender.send(ReaderMessage::ArtifactDone(report));
                let _ = sender.send(ReaderMessage::Progress {
                    count: total,
                    artifact,
                });
            }
            Err(e) => {
                tracing::warn!("Error processing '{}': {}", artifact, e);
                let _ = sender.send(ReaderMessage::Error {
                    artifact,
                    error: e.to_string(),
                });
            }
        }
    }

    let elapsed = start.elapsed();
    tracing::info!(
        "Reader complete: {} events from {} artifacts in {:.2}s",
        total,
        artifacts.len(),
        elapsed.as_secs_f64()
    );
    let _ = sender.send(ReaderMessage::Complete { total, elapsed });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::DiagnosticKind;
    use crate::core::event::{ApplicationActivity, EventData, TimeLabel};
    use chrono::{TimeZone, Utc};

    fn event() -> TimestampedEvent {
        TimestampedEvent {
            artifact: Arc::from("k.db"),
            data: Arc::new(EventData::Application(ApplicationActivity {
                bundle_identifier: Some("com.apple.Safari".into()),
                duration: None,
            })),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            label: TimeLabel::Start,
        }
    }

    #[test]
    fn test_channel_sink_batches_and_flushes() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let pending = PendingBatch::default();
        let mut sink = ChannelSink::new(&tx, &pending);
        for _ in 0..EVENT_BATCH_SIZE + 1 {
            sink.accept(event()).unwrap();
        }
        match rx.try_recv().unwrap() {
            ReaderMessage::EventBatch(batch) => assert_eq!(batch.len(), EVENT_BATCH_SIZE),
            other => panic!("unexpected message: {other:?}"),
        }
        assert!(rx.try_recv().is_err());

        sink.finish().unwrap();
        match rx.try_recv().unwrap() {
            ReaderMessage::EventBatch(batch) => assert_eq!(batch.len(), 1),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_channel_sink_reports_disconnect_as_sink_failure() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let pending = PendingBatch::default();
        let mut sink = ChannelSink::new(&tx, &pending);
        sink.accept(event()).unwrap();
        let err = sink.finish().unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_diagnostic_follows_pending_events() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let pending = PendingBatch::default();
        let mut sink = ChannelSink::new(&tx, &pending);
        let mut diagnostics = ChannelDiagnostics::new(&tx, &pending);

        sink.accept(event()).unwrap();
        diagnostics.report(Diagnostic {
            artifact: Arc::from("k.db"),
            kind: DiagnosticKind::UnrecognizedRecord,
            detail: "'/device/isLocked'".into(),
        });
        sink.accept(event()).unwrap();
        sink.finish().unwrap();

        let messages: Vec<ReaderMessage> = rx.try_iter().collect();
        assert_eq!(messages.len(), 3);
        assert!(matches!(&messages[0], ReaderMessage::EventBatch(batch) if batch.len() == 1));
        assert!(matches!(messages[1], ReaderMessage::Diagnostic(_)));
        assert!(matches!(&messages[2], ReaderMessage::EventBatch(batch) if batch.len() == 1));
    }

    #[test]
    fn test_missing_file_is_reported_and_run_completes() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let registry = Arc::new(PluginRegistry::new());
        let cancel = Arc::new(AtomicBool::new(false));
        let handle = spawn_reader_thread(
            vec![PathBuf::from("/nonexistent/timelinesleuth/knowledgeC.db")],
            registry,
            tx,
            cancel,
        )
        .unwrap();
        handle.join().unwrap();

        let messages: Vec<ReaderMessage> = rx.try_iter().collect();
        assert!(matches!(messages[0], ReaderMessage::Error { .. }));
        assert!(matches!(
            messages.last(),
            Some(ReaderMessage::Complete { total: 0, .. })
        ));
    }

    #[test]
    fn test_cancelled_before_start_processes_nothing() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let cancel = Arc::new(AtomicBool::new(true));
        spawn_reader_thread(
            vec![PathBuf::from("a.db"), PathBuf::from("b.db")],
            Arc::new(PluginRegistry::new()),
            tx,
            cancel,
        )
        .unwrap()
        .join()
        .unwrap();

        let messages: Vec<ReaderMessage> = rx.try_iter().collect();
        assert_eq!(messages.len(), 1);
        assert!(matches!(messages[0], ReaderMessage::Complete { total: 0, .. }));
    }
}
