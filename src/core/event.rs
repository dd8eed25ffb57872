//! Canonical event model.
//!
//! A classified record produces exactly one [`EventData`], which is then
//! fanned out into zero or more [`TimestampedEvent`]s. The data is shared
//! between those events through an `Arc` and never copied.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::util::constants::UNKNOWN_FIELD_PLACEHOLDER;
use crate::util::time::format_timeline_timestamp;

/// Semantic meaning of a timestamp.
///
/// Declaration order is the emission order when one record carries several
/// timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeLabel {
    Creation,
    Start,
    End,
    Configured,
    Connected,
    Validated,
}

impl TimeLabel {
    /// Stable lowercase name used in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creation => "creation",
            Self::Start => "start",
            Self::End => "end",
            Self::Configured => "configured",
            Self::Connected => "connected",
            Self::Validated => "validated",
        }
    }
}

impl std::fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application usage recorded in the KnowledgeC store.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ApplicationActivity {
    pub bundle_identifier: Option<String>,
    /// `end - start` in Cocoa seconds, present only when both were set.
    pub duration: Option<f64>,
}

/// Safari page visit recorded in the KnowledgeC store.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SafariHistory {
    pub url: Option<String>,
    pub title: Option<String>,
    pub duration: Option<f64>,
}

/// One account entry of the Apple ID authentication plist.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AccountConfiguration {
    /// Account name (the entry's key under `Accounts`).
    pub key: String,
    /// Path of the parent dictionary.
    pub root: String,
    pub first_name: String,
    pub last_name: String,
}

impl AccountConfiguration {
    /// `name (First Last)` summary shared by every account description.
    pub fn summary(&self) -> String {
        format!("{} ({} {})", self.key, self.first_name, self.last_name)
    }
}

/// Typed payload of a classified record.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "data_type")]
pub enum EventData {
    #[serde(rename = "mac:knowledgec:application")]
    Application(ApplicationActivity),
    #[serde(rename = "mac:knowledgec:safari")]
    Safari(SafariHistory),
    #[serde(rename = "plist:apple_account")]
    AppleAccount(AccountConfiguration),
}

impl EventData {
    /// Stable data-type tag, identical to the serialised `data_type` field.
    pub fn data_type(&self) -> &'static str {
        match self {
            Self::Application(_) => "mac:knowledgec:application",
            Self::Safari(_) => "mac:knowledgec:safari",
            Self::AppleAccount(_) => "plist:apple_account",
        }
    }

    /// Human-readable description of this data as seen at `label`.
    pub fn describe(&self, label: TimeLabel) -> String {
        match self {
            Self::Application(app) => {
                let mut text = format!(
                    "Application {} executed",
                    app.bundle_identifier
                        .as_deref()
                        .unwrap_or(UNKNOWN_FIELD_PLACEHOLDER)
                );
                if let Some(duration) = app.duration {
                    text.push_str(&format!(" for {duration} seconds"));
                }
                text
            }
            Self::Safari(visit) => {
                let mut text = format!(
                    "Visited: {} ({})",
                    visit.url.as_deref().unwrap_or(UNKNOWN_FIELD_PLACEHOLDER),
                    visit.title.as_deref().unwrap_or(UNKNOWN_FIELD_PLACEHOLDER)
                );
                if let Some(duration) = visit.duration {
                    text.push_str(&format!(" Duration: {duration} seconds"));
                }
                text
            }
            Self::AppleAccount(account) => {
                let verb = match label {
                    TimeLabel::Configured => "Configured",
                    TimeLabel::Connected => "Connected",
                    TimeLabel::Validated => "Last validation",
                    _ => "Observed",
                };
                format!("{verb} Apple account {}", account.summary())
            }
        }
    }
}

/// One point on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampedEvent {
    /// Name of the artifact the event came from.
    pub artifact: Arc<str>,
    /// Payload shared with the other events of the same record.
    pub data: Arc<EventData>,
    pub timestamp: DateTime<Utc>,
    pub label: TimeLabel,
}

impl TimestampedEvent {
    /// Description for this particular event.
    pub fn description(&self) -> String {
        self.data.describe(self.label)
    }

    /// Flat projection used by every exporter.
    pub fn to_row(&self) -> TimelineRow<'_> {
        TimelineRow {
            timestamp: format_timeline_timestamp(&self.timestamp),
            label: self.label,
            artifact: &self.artifact,
            description: self.description(),
            data: &self.data,
        }
    }
}

/// Serialisable view of a [`TimestampedEvent`].
#[derive(Debug, serde::Serialize)]
pub struct TimelineRow<'a> {
    pub timestamp: String,
    pub label: TimeLabel,
    pub artifact: &'a str,
    pub description: String,
    #[serde(flatten)]
    pub data: &'a EventData,
}
