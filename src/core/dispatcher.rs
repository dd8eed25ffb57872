//! Query dispatch for tabular sources.
//!
//! A [`MatchedSource`] can only be obtained by passing the schema check, so
//! no query ever runs against an incompatible database. Dispatch then runs
//! every query of the plugin once, in declaration order, streaming rows to
//! the query's handler and containing per-record failures.

use std::ops::ControlFlow;
use std::sync::Arc;

use crate::core::artifact::ArtifactReport;
use crate::core::emitter::Emitter;
use crate::core::plugin::TabularPlugin;
use crate::core::schema::{match_schema, LiveSchema, SchemaFingerprint, SchemaMismatch};
use crate::core::table_reader::TableReader;
use crate::util::error::Result;

/// A plugin paired with the fingerprint the live schema matched.
#[derive(Clone, Copy)]
pub struct MatchedSource<'p> {
    plugin: &'p dyn TabularPlugin,
    fingerprint: Option<&'static SchemaFingerprint>,
}

impl<'p> MatchedSource<'p> {
    /// Check required tables and fingerprints of `plugin` against `live`.
    pub fn try_match(plugin: &'p dyn TabularPlugin, live: &LiveSchema) -> std::result::Result<Self, SchemaMismatch> {
        let fingerprint = match_schema(live, plugin.required_tables(), plugin.fingerprints())?;
        Ok(Self { plugin, fingerprint })
    }

    pub fn plugin_name(&self) -> &'static str {
        self.plugin.name()
    }

    pub fn fingerprint(&self) -> Option<&'static SchemaFingerprint> {
        self.fingerprint
    }
}

/// Run all queries of a matched source.
///
/// # Errors
/// Reader and sink failures are fatal and returned as-is. Everything that
/// happened before the failure (emitted events, reported diagnostics) stays.
pub fn dispatch(
    matched: MatchedSource<'_>,
    reader: &mut dyn TableReader,
    emitter: &mut Emitter<'_>,
) -> Result<ArtifactReport> {
    let mut report = ArtifactReport::new(Arc::clone(emitter.artifact()));
    report.mark_matched(matched.plugin_name(), matched.fingerprint.map(|fp| fp.name));

    tracing::debug!(
        "{}: dispatching plugin '{}' (schema {})",
        emitter.artifact(),
        matched.plugin_name(),
        matched.fingerprint.map_or("unchecked", |fp| fp.name)
    );

    // Set only when records were left unread.
    let mut stopped_early = false;

    for query in matched.plugin.queries() {
        if emitter.is_cancelled() {
            stopped_early = true;
            break;
        }

        let rows = reader.for_each_row(query.sql, &mut |row| {
            if emitter.is_cancelled() {
                stopped_early = true;
                return Ok(ControlFlow::Break(()));
            }
            report.record_started();
            if let Err(e) = (query.handler)(&row, emitter) {
                emitter.contain(e)?;
                report.record_skipped();
            }
            Ok(ControlFlow::Continue(()))
        })?;

        tracing::debug!("{}: query '{}' returned {} rows", emitter.artifact(), query.name, rows);
    }

    report.finish(
        stopped_early,
        emitter.events_emitted(),
        emitter.diagnostics_reported(),
    );
    tracing::info!(
        "{}: {} events from {} records ({} skipped)",
        report.artifact,
        report.events,
        report.records,
        report.skipped_records
    );
    Ok(report)
}
