//! Unified error types for TimelineSleuth.
//!
//! All fallible operations throughout the codebase return
//! `Result<T, TimelineSleuthError>`. Variants are split into two families:
//! failures that are contained at record or event granularity (surfaced as
//! diagnostics, see [`crate::core::diagnostics`]) and resource failures that
//! halt processing of the current artifact. [`TimelineSleuthError::is_fatal`]
//! draws that line.

/// Unified error type used throughout TimelineSleuth.
#[derive(Debug, thiserror::Error)]
pub enum TimelineSleuthError {
    /// No plugin recognises the artifact, or its schema matches no known
    /// fingerprint. The artifact is skipped.
    #[error("Unsupported source '{artifact}': {reason}")]
    UnsupportedSource {
        /// Name of the artifact that was rejected.
        artifact: String,
        /// Why no plugin accepted it.
        reason: String,
    },

    /// A record's discriminant is not covered by any classification rule.
    #[error("Unrecognized record discriminant '{discriminant}'")]
    UnrecognizedRecord {
        /// The discriminant value that matched no rule.
        discriminant: String,
    },

    /// A raw timestamp could not be converted to a canonical instant.
    #[error("Invalid timestamp in '{field}': {reason}")]
    InvalidTimestamp {
        /// Source field the value was read from.
        field: String,
        /// What was wrong with the value.
        reason: String,
    },

    /// A non-timestamp field held a value of the wrong type.
    #[error("Field '{field}' expected {expected}, found {found}")]
    FieldType {
        /// Source field (column or key) name.
        field: String,
        /// Type the consumer asked for.
        expected: &'static str,
        /// Type actually present.
        found: &'static str,
    },

    /// The event sink refused an event. Fatal for the current artifact.
    #[error("Sink failure: {0}")]
    SinkFailure(String),

    /// The underlying artifact reader failed outside of SQLite or plist
    /// decoding (e.g. unknown query column set, closed source).
    #[error("Reader error: {context}: {detail}")]
    Reader {
        /// The operation that failed.
        context: String,
        /// Detail from the collaborator.
        detail: String,
    },

    /// SQLite reported an error while reading a database artifact.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A property list could not be decoded.
    #[error("Plist error: {0}")]
    Plist(#[from] plist::Error),

    /// Export (CSV or JSON lines) setup failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// A run configuration file or option is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catch-all for I/O errors (file reads, writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TimelineSleuthError {
    /// Returns `true` when the error must halt processing of the current
    /// artifact. Record- and event-level failures return `false` and are
    /// reported as diagnostics instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedSource { .. }
                | Self::UnrecognizedRecord { .. }
                | Self::InvalidTimestamp { .. }
                | Self::FieldType { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimelineSleuthError>;

/// Build an [`TimelineSleuthError::InvalidTimestamp`] for `field`.
pub fn invalid_timestamp(field: impl Into<String>, reason: impl Into<String>) -> TimelineSleuthError {
    TimelineSleuthError::InvalidTimestamp {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Build a [`TimelineSleuthError::SinkFailure`] from any displayable cause.
pub fn sink_err(cause: impl std::fmt::Display) -> TimelineSleuthError {
    TimelineSleuthError::SinkFailure(cause.to_string())
}
