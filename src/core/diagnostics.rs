//! Non-fatal diagnostic channel.
//!
//! Skip and warn conditions (unsupported source, unrecognised record,
//! invalid timestamp, malformed record) travel here instead of through the
//! `Result` chain, which only carries artifact-fatal failures.

use std::sync::Arc;

use crate::util::error::TimelineSleuthError;

/// Category of a non-fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The whole artifact was skipped.
    UnsupportedSource,
    /// One record was skipped because its discriminant has no rule.
    UnrecognizedRecord,
    /// One event was suppressed because its timestamp could not be read.
    InvalidTimestamp,
    /// One record was skipped because a field had the wrong type.
    MalformedRecord,
}

/// A single reported condition.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    pub artifact: Arc<str>,
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    /// Classify a contained error. Returns `None` for fatal errors, which
    /// must be propagated rather than reported.
    pub fn from_error(artifact: &Arc<str>, error: &TimelineSleuthError) -> Option<Self> {
        let kind = match error {
            TimelineSleuthError::UnsupportedSource { .. } => DiagnosticKind::UnsupportedSource,
            TimelineSleuthError::UnrecognizedRecord { .. } => DiagnosticKind::UnrecognizedRecord,
            TimelineSleuthError::InvalidTimestamp { .. } => DiagnosticKind::InvalidTimestamp,
            TimelineSleuthError::FieldType { .. } => DiagnosticKind::MalformedRecord,
            _ => return None,
        };
        Some(Self {
            artifact: Arc::clone(artifact),
            kind,
            detail: error.to_string(),
        })
    }

    /// Write this diagnostic to the log at a severity matching its kind.
    ///
    /// Unrecognised records are expected (the mappings are deliberately
    /// partial) and are only logged at debug level.
    pub fn log(&self) {
        match self.kind {
            DiagnosticKind::UnrecognizedRecord => {
                tracing::debug!("{}: {}", self.artifact, self.detail);
            }
            DiagnosticKind::UnsupportedSource
            | DiagnosticKind::InvalidTimestamp
            | DiagnosticKind::MalformedRecord => {
                tracing::warn!("{}: {}", self.artifact, self.detail);
            }
        }
    }
}

/// Receiver of diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_errors_are_not_diagnostics() {
        let artifact: Arc<str> = Arc::from("a.db");
        let err = TimelineSleuthError::SinkFailure("closed".into());
        assert!(Diagnostic::from_error(&artifact, &err).is_none());
    }

    #[test]
    fn test_field_type_maps_to_malformed_record() {
        let artifact: Arc<str> = Arc::from("a.db");
        let err = TimelineSleuthError::FieldType {
            field: "title".into(),
            expected: "text",
            found: "blob",
        };
        let diag = Diagnostic::from_error(&artifact, &err).unwrap();
        assert_eq!(diag.kind, DiagnosticKind::MalformedRecord);
        assert!(diag.detail.contains("title"));
    }
}
