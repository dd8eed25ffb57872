//! Run configuration for the command-line host.
//!
//! [`RunConfig`] is the serialisable set of options that control a run.
//! It can be persisted as JSON and loaded with `--config`; any flag given on
//! the command line overrides the corresponding file value.

use std::path::{Path, PathBuf};

use crate::util::error::{Result, TimelineSleuthError};

/// Output encoding for the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per line.
    #[default]
    Jsonl,
    /// Comma-separated values with a header row.
    Csv,
}

/// Options for a single run over a set of artifacts.
///
/// All fields default to "everything enabled, write JSON lines to stdout".
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Plugin names to enable. Empty means every registered plugin.
    pub plugins: Vec<String>,
    /// Timeline encoding.
    pub format: OutputFormat,
    /// Destination file. `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Optional debug-level log file in addition to stderr.
    pub log_file: Option<PathBuf>,
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`TimelineSleuthError::Config`] if the file cannot be read or
    /// is not valid JSON for this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TimelineSleuthError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| TimelineSleuthError::Config(e.to_string()))
    }
}
