//! Artifact identity, format detection and per-artifact outcome.
//!
//! Every artifact moves through `Unmatched → Matched → Emitting* → Done`.
//! `Unmatched` is terminal when no plugin accepts the source; `Cancelled`
//! replaces `Done` when the caller stops pulling records. Events emitted
//! before a later failure are never retracted.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::util::constants::{BPLIST_MAGIC, MAGIC_PROBE_LEN, SQLITE_MAGIC};
use crate::util::error::{Result, TimelineSleuthError};

/// Which reader an artifact needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// SQLite database, processed by tabular plugins.
    Database,
    /// Property list, processed by document plugins.
    Document,
}

/// One evidence source on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSource {
    /// Display name used as event provenance.
    pub name: Arc<str>,
    pub path: PathBuf,
    pub kind: ArtifactKind,
}

impl ArtifactSource {
    /// Sniff the file's leading bytes to decide its kind.
    ///
    /// # Errors
    /// [`TimelineSleuthError::Io`] if the file cannot be read and
    /// [`TimelineSleuthError::UnsupportedSource`] for unknown formats.
    pub fn detect(path: &Path) -> Result<Self> {
        let mut probe = Vec::with_capacity(MAGIC_PROBE_LEN);
        std::fs::File::open(path)?
            .take(MAGIC_PROBE_LEN as u64)
            .read_to_end(&mut probe)?;
        Self::from_magic(path, &probe)
    }

    /// Classify from already-read leading bytes.
    pub fn from_magic(path: &Path, probe: &[u8]) -> Result<Self> {
        let name: Arc<str> = Arc::from(path.display().to_string());
        let kind = if probe.starts_with(SQLITE_MAGIC) {
            ArtifactKind::Database
        } else if probe.starts_with(BPLIST_MAGIC) || looks_like_xml_plist(probe) {
            ArtifactKind::Document
        } else {
            return Err(TimelineSleuthError::UnsupportedSource {
                artifact: name.to_string(),
                reason: "not a SQLite database or property list".into(),
            });
        };
        Ok(Self {
            name,
            path: path.to_path_buf(),
            kind,
        })
    }

    /// Final path component, used for name-based plugin selection.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

fn looks_like_xml_plist(probe: &[u8]) -> bool {
    let text = String::from_utf8_lossy(probe);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<?xml") || text.starts_with("<plist") || text.starts_with("<!DOCTYPE plist")
}

/// Position of an artifact in its processing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingState {
    Unmatched,
    Matched,
    Emitting,
    Done,
    Cancelled,
}

/// Outcome of processing one artifact.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ArtifactReport {
    pub artifact: Arc<str>,
    pub state: ProcessingState,
    /// Plugin that accepted the artifact.
    pub plugin: Option<&'static str>,
    /// Schema fingerprint that matched, for tabular sources.
    pub fingerprint: Option<&'static str>,
    /// Records handed to a handler.
    pub records: usize,
    /// Records skipped with a diagnostic.
    pub skipped_records: usize,
    pub events: usize,
    pub diagnostics: usize,
}

impl ArtifactReport {
    pub fn new(artifact: Arc<str>) -> Self {
        Self {
            artifact,
            state: ProcessingState::Unmatched,
            plugin: None,
            fingerprint: None,
            records: 0,
            skipped_records: 0,
            events: 0,
            diagnostics: 0,
        }
    }

    pub fn mark_matched(&mut self, plugin: &'static str, fingerprint: Option<&'static str>) {
        debug_assert_eq!(self.state, ProcessingState::Unmatched);
        self.plugin = Some(plugin);
        self.fingerprint = fingerprint;
        self.transition(ProcessingState::Matched);
    }

    /// Count one record entering a handler.
    pub fn record_started(&mut self) {
        self.records += 1;
        if self.state == ProcessingState::Matched {
            self.transition(ProcessingState::Emitting);
        }
    }

    pub fn record_skipped(&mut self) {
        self.skipped_records += 1;
    }

    /// Close the report. `Unmatched` artifacts stay `Unmatched`.
    pub fn finish(&mut self, cancelled: bool, events: usize, diagnostics: usize) {
        self.events = events;
        self.diagnostics = diagnostics;
        if self.state == ProcessingState::Unmatched {
            return;
        }
        self.transition(if cancelled {
            ProcessingState::Cancelled
        } else {
            ProcessingState::Done
        });
    }

    fn transition(&mut self, next: ProcessingState) {
        tracing::trace!("{}: {:?} -> {:?}", self.artifact, self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_magic() {
        let db = ArtifactSource::from_magic(Path::new("knowledgeC.db"), b"SQLite format 3\0rest").unwrap();
        assert_eq!(db.kind, ArtifactKind::Database);

        let bplist = ArtifactSource::from_magic(Path::new("a.plist"), b"bplist00\xd1\x01").unwrap();
        assert_eq!(bplist.kind, ArtifactKind::Document);

        let xml = ArtifactSource::from_magic(Path::new("a.plist"), b"  <?xml version=\"1.0\"?>").unwrap();
        assert_eq!(xml.kind, ArtifactKind::Document);
    }

    #[test]
    fn test_unknown_magic_is_unsupported() {
        let err = ArtifactSource::from_magic(Path::new("x.bin"), b"\x7fELF").unwrap_err();
        assert!(matches!(err, TimelineSleuthError::UnsupportedSource { .. }));
    }

    #[test]
    fn test_report_lifecycle() {
        let mut report = ArtifactReport::new(Arc::from("k.db"));
        report.mark_matched("mac_knowledgec", Some("macos-10.14"));
        assert_eq!(report.state, ProcessingState::Matched);
        report.record_started();
        assert_eq!(report.state, ProcessingState::Emitting);
        report.finish(false, 3, 0);
        assert_eq!(report.state, ProcessingState::Done);
        assert_eq!(report.events, 3);
    }

    #[test]
    fn test_unmatched_report_stays_unmatched() {
        let mut report = ArtifactReport::new(Arc::from("k.db"));
        report.finish(false, 0, 1);
        assert_eq!(report.state, ProcessingState::Unmatched);
    }
}
