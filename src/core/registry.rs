//! Explicit plugin registry and the "classify and process" entry points.
//!
//! The registry is an ordinary value owned by the host. It starts empty;
//! [`crate::plugins::register_builtin`] fills it with the bundled plugins.

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use plist::Value;

use crate::core::artifact::{ArtifactKind, ArtifactReport, ArtifactSource};
use crate::core::diagnostics::DiagnosticSink;
use crate::core::dispatcher::{dispatch, MatchedSource};
use crate::core::document::{missing_keys, walk};
use crate::core::emitter::{Emitter, EventSink};
use crate::core::plugin::{DocumentPlugin, TabularPlugin};
use crate::core::table_reader::{SqliteReader, TableReader};
use crate::util::error::{Result, TimelineSleuthError};

/// Ordered set of plugins. Earlier registrations are tried first.
#[derive(Default)]
pub struct PluginRegistry {
    tabular: Vec<Box<dyn TabularPlugin>>,
    document: Vec<Box<dyn DocumentPlugin>>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.plugin_names())
            .finish()
    }
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_tabular(&mut self, plugin: impl TabularPlugin + 'static) {
        tracing::debug!("Registered tabular plugin '{}'", plugin.name());
        self.tabular.push(Box::new(plugin));
    }

    pub fn register_document(&mut self, plugin: impl DocumentPlugin + 'static) {
        tracing::debug!("Registered document plugin '{}'", plugin.name());
        self.document.push(Box::new(plugin));
    }

    /// Names of all registered plugins, tabular first.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.tabular
            .iter()
            .map(|p| p.name())
            .chain(self.document.iter().map(|p| p.name()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tabular.is_empty() && self.document.is_empty()
    }

    /// Keep only the named plugins. An empty list keeps everything.
    ///
    /// # Errors
    /// [`TimelineSleuthError::Config`] if a name matches no registered
    /// plugin; the registry is left unchanged.
    pub fn restrict_to(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        let known = self.plugin_names();
        let unknown: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|name| !known.iter().any(|k| k == name))
            .collect();
        if !unknown.is_empty() {
            return Err(TimelineSleuthError::Config(format!(
                "unknown plugin(s): {} (available: {})",
                unknown.join(", "),
                known.join(", ")
            )));
        }
        let wanted = |name: &str| names.iter().any(|n| n == name);
        self.tabular.retain(|p| wanted(p.name()));
        self.document.retain(|p| wanted(p.name()));
        tracing::info!("Plugins restricted to: {}", self.plugin_names().join(", "));
        Ok(())
    }

    /// Match the database against every tabular plugin in order and
    /// dispatch the first that accepts it.
    ///
    /// A database no plugin accepts yields no events and exactly one
    /// unsupported-source diagnostic.
    pub fn process_database(
        &self,
        reader: &mut dyn TableReader,
        emitter: &mut Emitter<'_>,
    ) -> Result<ArtifactReport> {
        let live = reader.schema()?;
        let mut rejections = Vec::with_capacity(self.tabular.len());

        for plugin in &self.tabular {
            match MatchedSource::try_match(plugin.as_ref(), &live) {
                Ok(matched) => return dispatch(matched, reader, emitter),
                Err(mismatch) => {
                    tracing::debug!("{}: plugin '{}' rejected: {}", emitter.artifact(), plugin.name(), mismatch);
                    rejections.push(format!("{}: {}", plugin.name(), mismatch));
                }
            }
        }

        reject(emitter, rejection_reason(rejections))
    }

    /// Walk a parsed property list with the first document plugin that
    /// applies to `document_name` and finds all of its required keys.
    pub fn process_document(
        &self,
        document_name: &str,
        root: &Value,
        emitter: &mut Emitter<'_>,
    ) -> Result<ArtifactReport> {
        let Some(root) = root.as_dictionary() else {
            return reject(emitter, "top level is not a dictionary".into());
        };

        let mut rejections = Vec::new();
        for plugin in &self.document {
            if !plugin.applies_to(document_name) {
                continue;
            }
            let missing = missing_keys(root, plugin.required_keys());
            if missing.is_empty() {
                return walk(plugin.as_ref(), root, emitter);
            }
            rejections.push(format!("{}: missing required keys: {}", plugin.name(), missing.join(", ")));
        }

        reject(emitter, rejection_reason(rejections))
    }

    /// Detect, open and process one artifact file.
    ///
    /// Unknown formats are reported as unsupported and yield an `Unmatched`
    /// report. Open and decode failures are fatal for this artifact.
    pub fn process_artifact(
        &self,
        path: &Path,
        sink: &mut dyn EventSink,
        diagnostics: &mut dyn DiagnosticSink,
        cancel: Option<&AtomicBool>,
    ) -> Result<ArtifactReport> {
        let artifact: Arc<str> = Arc::from(path.display().to_string());
        let mut emitter = Emitter::new(Arc::clone(&artifact), sink, diagnostics);
        if let Some(cancel) = cancel {
            emitter = emitter.with_cancel(cancel);
        }

        let source = match ArtifactSource::detect(path) {
            Ok(source) => source,
            Err(e) => {
                emitter.contain(e)?;
                let mut report = ArtifactReport::new(artifact);
                report.finish(false, 0, emitter.diagnostics_reported());
                return Ok(report);
            }
        };

        tracing::info!("Processing {} ({:?})", source.name, source.kind);
        match source.kind {
            ArtifactKind::Database => {
                let mut reader = SqliteReader::open(&source.path)?;
                self.process_database(&mut reader, &mut emitter)
            }
            ArtifactKind::Document => {
                let root = Value::from_file(&source.path)?;
                self.process_document(source.file_name(), &root, &mut emitter)
            }
        }
    }
}

fn rejection_reason(rejections: Vec<String>) -> String {
    if rejections.is_empty() {
        "no registered plugin applies".to_string()
    } else {
        rejections.join("; ")
    }
}

/// Report the artifact as unsupported and close an `Unmatched` report.
fn reject(emitter: &mut Emitter<'_>, reason: String) -> Result<ArtifactReport> {
    let artifact = emitter.artifact().to_string();
    emitter.contain(TimelineSleuthError::UnsupportedSource { artifact, reason })?;
    let mut report = ArtifactReport::new(Arc::clone(emitter.artifact()));
    report.finish(false, emitter.events_emitted(), emitter.diagnostics_reported());
    Ok(report)
}
