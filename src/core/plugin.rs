//! Plugin interfaces.
//!
//! A plugin declares what it needs from a source (required tables or keys,
//! known schema fingerprints) and how to turn each record into events. The
//! engine owns matching, iteration and failure containment.

use crate::core::document::DocumentRecord;
use crate::core::emitter::Emitter;
use crate::core::schema::SchemaFingerprint;
use crate::core::table_reader::Row;
use crate::util::error::Result;

/// Handles one row produced by a [`Query`].
pub type RowHandler = fn(&Row<'_>, &mut Emitter<'_>) -> Result<()>;

/// A fixed, read-only query and the handler its rows are routed to.
#[derive(Clone, Copy)]
pub struct Query {
    /// Handler name, used in logs.
    pub name: &'static str,
    pub sql: &'static str,
    pub handler: RowHandler,
}

/// Plugin for SQLite artifacts.
pub trait TabularPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Tables that must exist before any query may run.
    fn required_tables(&self) -> &'static [&'static str];

    /// Known layouts in match order. Empty accepts any schema that has the
    /// required tables.
    fn fingerprints(&self) -> &'static [&'static SchemaFingerprint];

    /// Queries in execution order.
    fn queries(&self) -> &'static [Query];
}

/// Plugin for property-list artifacts.
pub trait DocumentPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether the document's file name belongs to this plugin.
    fn applies_to(&self, document_name: &str) -> bool;

    /// Top-level keys that must all be present.
    fn required_keys(&self) -> &'static [&'static str];

    /// Top-level key whose entries become records.
    fn entries_key(&self) -> &'static str;

    /// Classify one entry and emit its events.
    fn handle_entry(&self, entry: &DocumentRecord<'_>, emitter: &mut Emitter<'_>) -> Result<()>;
}
