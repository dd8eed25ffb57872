//! Property-list document walking.
//!
//! A document plugin names one top-level dictionary; each of its entries is
//! one record. Entries are visited in document order and handed to the plugin
//! with typed accessors. A malformed entry is skipped with a diagnostic and
//! the walk continues with the next one.

use std::sync::Arc;
use std::time::SystemTime;

use plist::{Dictionary, Value};

use crate::core::artifact::ArtifactReport;
use crate::core::emitter::Emitter;
use crate::core::plugin::DocumentPlugin;
use crate::util::error::{Result, TimelineSleuthError};

/// One entry of a document section.
#[derive(Debug, Clone, Copy)]
pub struct DocumentRecord<'d> {
    name: &'d str,
    fields: &'d Dictionary,
}

impl<'d> DocumentRecord<'d> {
    pub fn new(name: &'d str, fields: &'d Dictionary) -> Self {
        Self { name, fields }
    }

    /// Key of this entry within its section.
    pub fn name(&self) -> &'d str {
        self.name
    }

    /// String leaf; absent reads as `None`.
    ///
    /// # Errors
    /// [`TimelineSleuthError::FieldType`] when the key holds another type.
    pub fn text(&self, key: &str) -> Result<Option<&'d str>> {
        match self.fields.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(field_type(key, "string", other)),
        }
    }

    /// String leaf with a placeholder for absent keys.
    pub fn text_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.text(key)?.unwrap_or(default).to_string())
    }

    /// Date leaf; absent reads as `None`.
    pub fn date(&self, key: &str) -> Result<Option<SystemTime>> {
        match self.fields.get(key) {
            None => Ok(None),
            Some(Value::Date(date)) => Ok(Some(SystemTime::from(*date))),
            Some(other) => Err(field_type(key, "date", other)),
        }
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Dictionary(_) => "dictionary",
        Value::Boolean(_) => "boolean",
        Value::Data(_) => "data",
        Value::Date(_) => "date",
        Value::Real(_) => "real",
        Value::Integer(_) => "integer",
        Value::String(_) => "string",
        _ => "other",
    }
}

fn field_type(key: &str, expected: &'static str, found: &Value) -> TimelineSleuthError {
    TimelineSleuthError::FieldType {
        field: key.to_string(),
        expected,
        found: value_type_name(found),
    }
}

/// Entries of `root[section]`. A missing or non-dictionary section yields
/// nothing; an entry that is not itself a dictionary yields an error.
pub fn entries<'d>(
    root: &'d Dictionary,
    section: &str,
) -> impl Iterator<Item = Result<DocumentRecord<'d>>> + 'd {
    root.get(section)
        .and_then(Value::as_dictionary)
        .into_iter()
        .flat_map(|dict| dict.iter())
        .map(|(name, value)| match value {
            Value::Dictionary(fields) => Ok(DocumentRecord::new(name, fields)),
            other => Err(field_type(name, "dictionary", other)),
        })
}

/// Keys from `required` that `root` lacks.
pub fn missing_keys<'r>(root: &Dictionary, required: &[&'r str]) -> Vec<&'r str> {
    required
        .iter()
        .copied()
        .filter(|key| !root.contains_key(key))
        .collect()
}

/// Walk the plugin's section of `root`, handing every entry to the plugin.
///
/// # Errors
/// Only fatal errors (sink failures) are returned; everything else is
/// contained per entry.
pub fn walk(
    plugin: &dyn DocumentPlugin,
    root: &Dictionary,
    emitter: &mut Emitter<'_>,
) -> Result<ArtifactReport> {
    let mut report = ArtifactReport::new(Arc::clone(emitter.artifact()));
    report.mark_matched(plugin.name(), None);

    let mut stopped_early = false;
    for entry in entries(root, plugin.entries_key()) {
        if emitter.is_cancelled() {
            stopped_early = true;
            break;
        }
        report.record_started();
        let handled = entry.and_then(|record| plugin.handle_entry(&record, emitter));
        if let Err(e) = handled {
            emitter.contain(e)?;
            report.record_skipped();
        }
    }

    report.finish(
        stopped_early,
        emitter.events_emitted(),
        emitter.diagnostics_reported(),
    );
    tracing::info!(
        "{}: {} events from {} entries ({} skipped)",
        report.artifact,
        report.events,
        report.records,
        report.skipped_records
    );
    Ok(report)
}
