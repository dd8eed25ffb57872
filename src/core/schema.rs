//! Schema fingerprints and structural schema matching.
//!
//! A [`SchemaFingerprint`] is immutable static data describing one known
//! layout of a database (table → ordered columns and table constraints).
//! The live schema read from a database is parsed into [`TableDefinition`]s
//! and compared structurally: token by token, case-insensitively, ignoring
//! whitespace layout. Matching is all-or-nothing per fingerprint and the
//! first matching candidate wins.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// One expected column: its name and the rest of its definition
/// (type and column constraints), e.g. `("Z_PK", "INTEGER PRIMARY KEY")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub definition: &'static str,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, definition: &'static str) -> Self {
        Self { name, definition }
    }
}

/// Expected layout of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
    /// Table-level constraints such as `PRIMARY KEY (A, B)`.
    pub constraints: &'static [&'static str],
}

impl TableSpec {
    /// Render the `CREATE TABLE` statement for this table.
    pub fn to_create_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.definition))
            .collect();
        parts.extend(self.constraints.iter().map(|c| c.to_string()));
        format!("CREATE TABLE {} ( {} )", self.name, parts.join(", "))
    }
}

/// A named, versioned expected schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaFingerprint {
    pub name: &'static str,
    pub tables: &'static [TableSpec],
}

/// A column parsed from a live `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    /// Normalised definition tokens, single-space separated.
    pub definition: String,
}

/// A table parsed from a live `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub constraints: Vec<String>,
}

const TABLE_CONSTRAINT_KEYWORDS: &[&str] = &["PRIMARY", "UNIQUE", "CHECK", "FOREIGN", "CONSTRAINT"];

fn token_re() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| {
        Regex::new(r#""[^"]*"|`[^`]*`|\[[^\]]*\]|'[^']*'|[\w$]+|\S"#).expect("valid SQL token regex")
    })
}

fn tokens(text: &str) -> Vec<&str> {
    token_re().find_iter(text).map(|m| m.as_str()).collect()
}

/// Collapse a clause to single-space-separated tokens.
fn normalize_clause(text: &str) -> String {
    tokens(text).join(" ")
}

fn strip_identifier_quotes(ident: &str) -> &str {
    let bytes = ident.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if matches!((first, last), (b'"', b'"') | (b'`', b'`') | (b'[', b']')) {
            return &ident[1..ident.len() - 1];
        }
    }
    ident
}

/// Split a table body on commas that are not nested inside parentheses.
fn split_top_level(body: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut depth = 0usize;

    for token in tokens(body) {
        match token {
            "(" => depth += 1,
            ")" => depth = depth.saturating_sub(1),
            "," if depth == 0 => {
                if !current.is_empty() {
                    parts.push(current.join(" "));
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(token);
    }
    if !current.is_empty() {
        parts.push(current.join(" "));
    }
    parts
}

impl TableDefinition {
    /// Parse a `CREATE TABLE` statement as stored in `sqlite_master`.
    ///
    /// Returns `None` when the statement has no parenthesised body (for
    /// example `CREATE TABLE t AS SELECT …` or virtual tables); such a table
    /// can never match a fingerprint.
    pub fn parse(name: &str, create_sql: &str) -> Option<Self> {
        let open = create_sql.find('(')?;
        let close = create_sql.rfind(')')?;
        if close <= open {
            return None;
        }

        let mut columns = Vec::new();
        let mut constraints = Vec::new();
        for part in split_top_level(&create_sql[open + 1..close]) {
            let (head, rest) = part.split_once(' ').unwrap_or((part.as_str(), ""));
            let keyword = head.to_ascii_uppercase();
            if TABLE_CONSTRAINT_KEYWORDS.contains(&keyword.as_str()) {
                constraints.push(part);
            } else {
                columns.push(ColumnDefinition {
                    name: strip_identifier_quotes(head).to_string(),
                    definition: rest.to_string(),
                });
            }
        }

        Some(Self {
            name: name.to_string(),
            columns,
            constraints,
        })
    }

    /// Structural comparison against an expected table layout.
    pub fn matches(&self, table: &TableSpec) -> bool {
        self.name.eq_ignore_ascii_case(table.name)
            && self.columns.len() == table.columns.len()
            && self.constraints.len() == table.constraints.len()
            && self.columns.iter().zip(table.columns).all(|(live, expected)| {
                live.name.eq_ignore_ascii_case(expected.name)
                    && live
                        .definition
                        .eq_ignore_ascii_case(&normalize_clause(expected.definition))
            })
            && self
                .constraints
                .iter()
                .zip(table.constraints)
                .all(|(live, expected)| live.eq_ignore_ascii_case(&normalize_clause(expected)))
    }
}

/// The observed schema of one database, keyed by upper-cased table name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSchema {
    tables: BTreeMap<String, Option<TableDefinition>>,
}

impl LiveSchema {
    /// Build from `(table name, CREATE TABLE sql)` pairs. A missing or
    /// unparsable statement still records the table as present.
    pub fn from_sql<I, N, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = (N, Option<S>)>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let tables = tables
            .into_iter()
            .map(|(name, sql)| {
                let name = name.as_ref();
                let definition = sql.and_then(|sql| TableDefinition::parse(name, sql.as_ref()));
                (name.to_ascii_uppercase(), definition)
            })
            .collect();
        Self { tables }
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(&name.to_ascii_uppercase())
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Required tables that are not present.
    pub fn missing<'r>(&self, required: &[&'r str]) -> Vec<&'r str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has_table(name))
            .collect()
    }

    /// Whole-schema comparison: same table set, every table structurally
    /// equal.
    pub fn matches(&self, fingerprint: &SchemaFingerprint) -> bool {
        self.tables.len() == fingerprint.tables.len()
            && fingerprint.tables.iter().all(|table| {
                matches!(
                    self.tables.get(&table.name.to_ascii_uppercase()),
                    Some(Some(live)) if live.matches(table)
                )
            })
    }
}

/// Why a live schema was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaMismatch {
    /// Some required tables are absent; no query may run.
    MissingTables(Vec<&'static str>),
    /// Required tables are present but no fingerprint matches.
    UnknownLayout,
}

impl std::fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTables(tables) => write!(f, "missing required tables: {}", tables.join(", ")),
            Self::UnknownLayout => f.write_str("schema matches no known fingerprint"),
        }
    }
}

/// Select the first candidate fingerprint the live schema matches.
///
/// Required tables are checked first. An empty candidate list accepts any
/// schema that has the required tables and yields `Ok(None)`.
pub fn match_schema(
    live: &LiveSchema,
    required: &[&'static str],
    candidates: &[&'static SchemaFingerprint],
) -> Result<Option<&'static SchemaFingerprint>, SchemaMismatch> {
    let missing = live.missing(required);
    if !missing.is_empty() {
        return Err(SchemaMismatch::MissingTables(missing));
    }
    if candidates.is_empty() {
        return Ok(None);
    }
    candidates
        .iter()
        .copied()
        .find(|fp| live.matches(fp))
        .map(Some)
        .ok_or(SchemaMismatch::UnknownLayout)
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIRST: SchemaFingerprint = SchemaFingerprint {
        name: "first",
        tables: &[TableSpec {
            name: "T",
            columns: &[ColumnSpec::new("ID", "INTEGER PRIMARY KEY"), ColumnSpec::new("A", "VARCHAR")],
            constraints: &[],
        }],
    };

    static SECOND: SchemaFingerprint = SchemaFingerprint {
        name: "second",
        tables: &[TableSpec {
            name: "T",
            columns: &[
                ColumnSpec::new("ID", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("A", "VARCHAR"),
                ColumnSpec::new("B", "TIMESTAMP"),
            ],
            constraints: &[],
        }],
    };

    #[test]
    fn test_parse_splits_columns_and_constraints() {
        let table = TableDefinition::parse(
            "Z_4EVENT",
            "CREATE TABLE Z_4EVENT ( Z_4CUSTOMMETADATA INTEGER, Z_10EVENT INTEGER, PRIMARY KEY (Z_4CUSTOMMETADATA, Z_10EVENT) )",
        )
        .unwrap();
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[1].name, "Z_10EVENT");
        assert_eq!(table.constraints, ["PRIMARY KEY ( Z_4CUSTOMMETADATA , Z_10EVENT )"]);
    }

    #[test]
    fn test_whitespace_and_case_are_ignored() {
        let table = TableDefinition::parse(
            "t",
            "CREATE TABLE t (\n  id integer   primary key,\n  a varchar\n)",
        )
        .unwrap();
        assert!(table.matches(&FIRST.tables[0]));
    }

    #[test]
    fn test_parenthesised_types_survive_splitting() {
        let table = TableDefinition::parse(
            "Z_METADATA",
            "CREATE TABLE Z_METADATA (Z_VERSION INTEGER PRIMARY KEY, Z_UUID VARCHAR(255), Z_PLIST BLOB)",
        )
        .unwrap();
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.columns[1].definition, "VARCHAR ( 255 )");
    }

    #[test]
    fn test_second_fingerprint_selected_when_only_it_matches() {
        let live = LiveSchema::from_sql([(
            "T",
            Some("CREATE TABLE T (ID INTEGER PRIMARY KEY, A VARCHAR, B TIMESTAMP)"),
        )]);
        let chosen = match_schema(&live, &["T"], &[&FIRST, &SECOND]).unwrap();
        assert_eq!(chosen.map(|fp| fp.name), Some("second"));
    }

    #[test]
    fn test_column_order_matters() {
        let live = LiveSchema::from_sql([("T", Some("CREATE TABLE T (A VARCHAR, ID INTEGER PRIMARY KEY)"))]);
        assert_eq!(
            match_schema(&live, &["T"], &[&FIRST, &SECOND]),
            Err(SchemaMismatch::UnknownLayout)
        );
    }

    #[test]
    fn test_missing_required_table_reported_before_matching() {
        let live = LiveSchema::from_sql([("OTHER", Some("CREATE TABLE OTHER (X INTEGER)"))]);
        assert_eq!(
            match_schema(&live, &["T"], &[&FIRST]),
            Err(SchemaMismatch::MissingTables(vec!["T"]))
        );
    }

    #[test]
    fn test_extra_table_breaks_match() {
        let live = LiveSchema::from_sql([
            ("T", Some("CREATE TABLE T (ID INTEGER PRIMARY KEY, A VARCHAR)")),
            ("EXTRA", Some("CREATE TABLE EXTRA (X INTEGER)")),
        ]);
        assert!(!live.matches(&FIRST));
    }

    #[test]
    fn test_create_sql_round_trips_through_parser() {
        let sql = SECOND.tables[0].to_create_sql();
        let parsed = TableDefinition::parse("T", &sql).unwrap();
        assert!(parsed.matches(&SECOND.tables[0]));
    }
}
