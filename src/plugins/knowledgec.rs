//! macOS KnowledgeC (Duet) activity database.
//!
//! Every ZOBJECT row is one record; its ZSTREAMNAME is the discriminant.
//! Safari history and application usage streams are mapped, everything else
//! is reported as unrecognised.

use crate::core::classifier::{build_from_row, PrefixRule, RowContext};
use crate::core::emitter::{Emitter, TimeCandidate};
use crate::core::event::{ApplicationActivity, EventData, SafariHistory, TimeLabel};
use crate::core::plugin::{Query, TabularPlugin};
use crate::core::schema::SchemaFingerprint;
use crate::core::table_reader::Row;
use crate::plugins::knowledgec_schema::{FINGERPRINTS, REQUIRED_TABLES};
use crate::util::constants::{KNOWLEDGEC_APP_PREFIX, KNOWLEDGEC_SAFARI_PREFIX};
use crate::util::error::Result;

const ACTIVITY_QUERY: &str = "SELECT \
    ZOBJECT.ZCREATIONDATE AS \"entry_creation\", \
    ZOBJECT.ZSTARTDATE AS \"start\", \
    ZOBJECT.ZENDDATE AS \"end\", \
    ZOBJECT.ZSTREAMNAME AS \"action\", \
    ZOBJECT.ZVALUESTRING AS \"zvaluestring\", \
    ZSTRUCTUREDMETADATA.Z_DKSAFARIHISTORYMETADATAKEY__TITLE AS \"title\" \
    FROM ZOBJECT \
    LEFT JOIN ZSTRUCTUREDMETADATA \
    ON ZOBJECT.ZSTRUCTUREDMETADATA = ZSTRUCTUREDMETADATA.Z_PK";

static QUERIES: &[Query] = &[Query {
    name: "knowledgec_row",
    sql: ACTIVITY_QUERY,
    handler: knowledgec_row,
}];

/// Stream-name prefixes in match order.
const RULES: &[PrefixRule] = &[
    PrefixRule {
        prefix: KNOWLEDGEC_SAFARI_PREFIX,
        build: safari_history,
    },
    PrefixRule {
        prefix: KNOWLEDGEC_APP_PREFIX,
        build: application_activity,
    },
];

/// Tabular plugin for `knowledgeC.db`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeCPlugin;

impl TabularPlugin for KnowledgeCPlugin {
    fn name(&self) -> &'static str {
        "mac_knowledgec"
    }

    fn required_tables(&self) -> &'static [&'static str] {
        REQUIRED_TABLES
    }

    fn fingerprints(&self) -> &'static [&'static SchemaFingerprint] {
        FINGERPRINTS
    }

    fn queries(&self) -> &'static [Query] {
        QUERIES
    }
}

fn knowledgec_row(row: &Row<'_>, emitter: &mut Emitter<'_>) -> Result<()> {
    // A NULL stream name matches no rule.
    let action = row.text("action")?.unwrap_or_default();

    let start = row.real("start");
    let end = row.real("end");
    let context = RowContext {
        duration: activity_duration(&start, &end),
    };
    let data = build_from_row(RULES, action, row, context)?;

    emitter.emit(
        data,
        [
            TimeCandidate::from_cocoa(TimeLabel::Creation, "entry_creation", row.real("entry_creation")),
            TimeCandidate::from_cocoa(TimeLabel::Start, "start", start),
            TimeCandidate::from_cocoa(TimeLabel::End, "end", end),
        ],
    )?;
    Ok(())
}

/// `end - start` in Cocoa seconds, taken before any conversion.
fn activity_duration(start: &Result<Option<f64>>, end: &Result<Option<f64>>) -> Option<f64> {
    match (start, end) {
        (Ok(Some(start)), Ok(Some(end)))
            if *start != 0.0 && *end != 0.0 && start.is_finite() && end.is_finite() =>
        {
            Some(end - start)
        }
        _ => None,
    }
}

fn safari_history(row: &Row<'_>, context: RowContext) -> Result<EventData> {
    Ok(EventData::Safari(SafariHistory {
        url: row.text("zvaluestring")?.map(String::from),
        title: row.text("title")?.map(String::from),
        duration: context.duration,
    }))
}

fn application_activity(row: &Row<'_>, context: RowContext) -> Result<EventData> {
    Ok(EventData::Application(ApplicationActivity {
        bundle_identifier: row.text("zvaluestring")?.map(String::from),
        duration: context.duration,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::diagnostics::{Diagnostic, DiagnosticKind};
    use crate::core::dispatcher::{dispatch, MatchedSource};
    use crate::core::event::TimestampedEvent;
    use crate::core::table_reader::{SqliteReader, TableReader};
    use crate::plugins::knowledgec_schema::{MACOS_10_13, MACOS_10_14};
    use crate::util::time::cocoa_to_utc;
    use rusqlite::Connection;

    fn database(fingerprint: &SchemaFingerprint, rows: &str) -> SqliteReader {
        let conn = Connection::open_in_memory().unwrap();
        for table in fingerprint.tables {
            conn.execute_batch(&table.to_create_sql()).unwrap();
        }
        conn.execute_batch(rows).unwrap();
        SqliteReader::from_connection(conn)
    }

    fn run(mut reader: SqliteReader) -> (Vec<TimestampedEvent>, Vec<Diagnostic>, Option<&'static str>) {
        let live = reader.schema().unwrap();
        let matched = MatchedSource::try_match(&KnowledgeCPlugin, &live).unwrap();
        let mut events = Vec::new();
        let mut diags = Vec::new();
        let mut emitter = Emitter::new(Arc::from("knowledgeC.db"), &mut events, &mut diags);
        let report = dispatch(matched, &mut reader, &mut emitter).unwrap();
        (events, diags, report.fingerprint)
    }

    #[test]
    fn test_safari_visit_fans_out_three_events() {
        let reader = database(
            &MACOS_10_14,
            "INSERT INTO ZSTRUCTUREDMETADATA (Z_PK, Z_DKSAFARIHISTORYMETADATAKEY__TITLE) VALUES (7, 'Example');
             INSERT INTO ZOBJECT (Z_PK, ZCREATIONDATE, ZSTARTDATE, ZENDDATE, ZSTREAMNAME, ZVALUESTRING, ZSTRUCTUREDMETADATA)
             VALUES (1, 900.5, 1000.0, 1500.0, '/safari/history', 'https://example.com/', 7);",
        );
        let (events, diags, fingerprint) = run(reader);

        assert_eq!(fingerprint, Some("macos-10.14"));
        assert!(diags.is_empty());
        let labels: Vec<TimeLabel> = events.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec![TimeLabel::Creation, TimeLabel::Start, TimeLabel::End]);
        assert!(events.iter().all(|e| Arc::ptr_eq(&e.data, &events[0].data)));
        assert_eq!(
            *events[0].data,
            EventData::Safari(SafariHistory {
                url: Some("https://example.com/".into()),
                title: Some("Example".into()),
                duration: Some(500.0),
            })
        );
        assert_eq!(events[1].timestamp, cocoa_to_utc("start", 1000.0).unwrap());
        assert_eq!(
            events[2].description(),
            "Visited: https://example.com/ (Example) Duration: 500 seconds"
        );
    }

    #[test]
    fn test_application_without_end_has_no_duration() {
        let reader = database(
            &MACOS_10_13,
            "INSERT INTO ZOBJECT (Z_PK, ZCREATIONDATE, ZSTARTDATE, ZENDDATE, ZSTREAMNAME, ZVALUESTRING)
             VALUES (1, 0, 1000.0, NULL, '/app/inFocus', 'com.apple.Terminal');",
        );
        let (events, diags, fingerprint) = run(reader);

        assert_eq!(fingerprint, Some("macos-10.13"));
        assert!(diags.is_empty());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].label, TimeLabel::Start);
        assert_eq!(
            *events[0].data,
            EventData::Application(ApplicationActivity {
                bundle_identifier: Some("com.apple.Terminal".into()),
                duration: None,
            })
        );
    }

    #[test]
    fn test_unmapped_streams_are_unrecognized() {
        let reader = database(
            &MACOS_10_14,
            "INSERT INTO ZOBJECT (Z_PK, ZSTARTDATE, ZSTREAMNAME) VALUES (1, 1000.0, '/device/isLocked');
             INSERT INTO ZOBJECT (Z_PK, ZSTARTDATE, ZSTREAMNAME) VALUES (2, 1000.0, NULL);
             INSERT INTO ZOBJECT (Z_PK, ZSTARTDATE, ZSTREAMNAME, ZVALUESTRING) VALUES (3, 1000.0, '/app/usage', 'com.apple.Mail');",
        );
        let (events, diags, _) = run(reader);

        assert_eq!(events.len(), 1);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.kind == DiagnosticKind::UnrecognizedRecord));
    }

    #[test]
    fn test_non_numeric_timestamp_suppresses_only_that_event() {
        let reader = database(
            &MACOS_10_14,
            "INSERT INTO ZOBJECT (Z_PK, ZCREATIONDATE, ZSTARTDATE, ZENDDATE, ZSTREAMNAME, ZVALUESTRING)
             VALUES (1, 'garbage', 1000.0, 1010.0, '/app/inFocus', 'com.apple.Notes');",
        );
        let (events, diags, _) = run(reader);

        assert_eq!(events.len(), 2);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::InvalidTimestamp);
        assert_eq!(
            events[0].data.describe(TimeLabel::Start),
            "Application com.apple.Notes executed for 10 seconds"
        );
    }

    #[test]
    fn test_duration_requires_both_bounds() {
        assert_eq!(activity_duration(&Ok(Some(1000.0)), &Ok(Some(1500.0))), Some(500.0));
        assert_eq!(activity_duration(&Ok(Some(1000.0)), &Ok(None)), None);
        assert_eq!(activity_duration(&Ok(Some(0.0)), &Ok(Some(1500.0))), None);
        assert_eq!(activity_duration(&Ok(Some(f64::NAN)), &Ok(Some(1500.0))), None);
    }
}
