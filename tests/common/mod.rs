//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use plist::{Dictionary, Value};
use rusqlite::Connection;
use timelinesleuth::core::artifact::ArtifactReport;
use timelinesleuth::core::diagnostics::Diagnostic;
use timelinesleuth::core::emitter::Emitter;
use timelinesleuth::core::event::TimestampedEvent;
use timelinesleuth::core::registry::PluginRegistry;
use timelinesleuth::core::schema::SchemaFingerprint;
use timelinesleuth::core::table_reader::SqliteReader;
use timelinesleuth::plugins::register_builtin;

pub const ACCOUNT_PLIST_NAME: &str = "com.apple.coreservices.appleidauthenticationinfo.ABC0-12.plist";

/// Registry with every bundled plugin.
pub fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    register_builtin(&mut registry);
    registry
}

/// Create every table of `fingerprint` on `conn`, then run `rows`.
pub fn populate(conn: &Connection, fingerprint: &SchemaFingerprint, rows: &str) {
    for table in fingerprint.tables {
        conn.execute_batch(&table.to_create_sql()).unwrap();
    }
    conn.execute_batch(rows).unwrap();
}

/// In-memory KnowledgeC database with the given layout and rows.
pub fn knowledgec_db(fingerprint: &SchemaFingerprint, rows: &str) -> SqliteReader {
    let conn = Connection::open_in_memory().unwrap();
    populate(&conn, fingerprint, rows);
    SqliteReader::from_connection(conn)
}

/// One Safari visit: creation 900, start 1000, end 1500, title "Example".
pub const SAFARI_VISIT: &str = "
    INSERT INTO ZSTRUCTUREDMETADATA (Z_PK, Z_DKSAFARIHISTORYMETADATAKEY__TITLE) VALUES (1, 'Example');
    INSERT INTO ZOBJECT (Z_PK, ZCREATIONDATE, ZSTARTDATE, ZENDDATE, ZSTREAMNAME, ZVALUESTRING, ZSTRUCTUREDMETADATA)
    VALUES (1, 900.0, 1000.0, 1500.0, '/safari/history', 'https://example.com/', 1);";

/// Plist date `secs` after the Unix epoch.
pub fn date(secs: u64) -> Value {
    Value::Date((UNIX_EPOCH + Duration::from_secs(secs)).into())
}

/// An account entry built from `(key, value)` pairs.
pub fn account(fields: &[(&str, Value)]) -> Value {
    Value::Dictionary(
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

/// Apple account document with all required top-level keys.
pub fn account_document(accounts: Vec<(&str, Value)>) -> Value {
    let mut section = Dictionary::new();
    for (name, entry) in accounts {
        section.insert(name.to_string(), entry);
    }
    let mut root = Dictionary::new();
    root.insert("AuthCertificates".into(), Value::Dictionary(Dictionary::new()));
    root.insert("AccessorVersions".into(), Value::Dictionary(Dictionary::new()));
    root.insert("Accounts".into(), Value::Dictionary(section));
    Value::Dictionary(root)
}

/// Outcome of processing one in-memory artifact.
pub struct Run {
    pub events: Vec<TimestampedEvent>,
    pub diagnostics: Vec<Diagnostic>,
    pub report: ArtifactReport,
}

pub fn run_database(registry: &PluginRegistry, mut reader: SqliteReader) -> Run {
    let mut events = Vec::new();
    let mut diagnostics = Vec::new();
    let mut emitter = Emitter::new(Arc::from("knowledgeC.db"), &mut events, &mut diagnostics);
    let report = registry.process_database(&mut reader, &mut emitter).unwrap();
    Run { events, diagnostics, report }
}

pub fn run_document(registry: &PluginRegistry, name: &str, root: &Value) -> Run {
    let mut events = Vec::new();
    let mut diagnostics = Vec::new();
    let mut emitter = Emitter::new(Arc::from(name), &mut events, &mut diagnostics);
    let report = registry.process_document(name, root, &mut emitter).unwrap();
    Run { events, diagnostics, report }
}

/// Fresh per-test scratch directory under the system temp dir.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("timelinesleuth_{}_{}", test, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
