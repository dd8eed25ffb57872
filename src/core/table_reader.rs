//! Tabular source boundary.
//!
//! [`TableReader`] is what the query dispatcher needs from a database: the
//! live table → `CREATE TABLE` mapping, and a way to stream the rows of a
//! read-only query one at a time. [`SqliteReader`] implements it on top of
//! `rusqlite`.

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::core::schema::LiveSchema;
use crate::util::constants::SQLITE_INTERNAL_TABLE_PREFIX;
use crate::util::error::{Result, TimelineSleuthError};

/// One cell of a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
        }
    }
}

impl From<rusqlite::types::Value> for CellValue {
    fn from(value: rusqlite::types::Value) -> Self {
        use rusqlite::types::Value;
        match value {
            Value::Null => Self::Null,
            Value::Integer(i) => Self::Integer(i),
            Value::Real(f) => Self::Real(f),
            Value::Text(s) => Self::Text(s),
            Value::Blob(b) => Self::Blob(b),
        }
    }
}

/// Column-name → position lookup, built once per query execution.
///
/// SQLite reports an unaliased column under its declared spelling, so names
/// are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let positions = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (Into::<String>::into(name).to_ascii_lowercase(), i))
            .collect();
        Self { positions }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(&column.to_ascii_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A borrowed result row with named access.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a ColumnIndex,
    values: &'a [CellValue],
}

impl<'a> Row<'a> {
    pub fn new(columns: &'a ColumnIndex, values: &'a [CellValue]) -> Self {
        Self { columns, values }
    }

    /// Raw cell for `column`.
    ///
    /// # Errors
    /// [`TimelineSleuthError::Reader`] if the query does not project
    /// `column`. A NULL cell is a value; a missing column is not.
    pub fn get(&self, column: &str) -> Result<&'a CellValue> {
        self.columns
            .position(column)
            .and_then(|i| self.values.get(i))
            .ok_or_else(|| TimelineSleuthError::Reader {
                context: "read column".into(),
                detail: format!("'{column}' is not part of the query projection"),
            })
    }

    /// Text value; NULL reads as `None`.
    ///
    /// # Errors
    /// [`TimelineSleuthError::FieldType`] for any other storage class.
    pub fn text(&self, column: &str) -> Result<Option<&'a str>> {
        match self.get(column)? {
            CellValue::Null => Ok(None),
            CellValue::Text(s) => Ok(Some(s.as_str())),
            other => Err(field_type(column, "text", other)),
        }
    }

    /// Numeric value as `f64`; NULL reads as `None`. SQLite may store a
    /// whole-valued REAL as INTEGER under NUMERIC affinity, so both are
    /// accepted.
    pub fn real(&self, column: &str) -> Result<Option<f64>> {
        match self.get(column)? {
            CellValue::Null => Ok(None),
            CellValue::Real(f) => Ok(Some(*f)),
            CellValue::Integer(i) => Ok(Some(*i as f64)),
            other => Err(field_type(column, "number", other)),
        }
    }
}

fn field_type(column: &str, expected: &'static str, found: &CellValue) -> TimelineSleuthError {
    TimelineSleuthError::FieldType {
        field: column.to_string(),
        expected,
        found: found.type_name(),
    }
}

/// Visitor called once per streamed row.
pub type RowVisitor<'v> = dyn FnMut(Row<'_>) -> Result<ControlFlow<()>> + 'v;

/// A read-only tabular source.
pub trait TableReader {
    /// Live schema, excluding tables maintained by the engine itself.
    fn schema(&self) -> Result<LiveSchema>;

    /// Run `sql` and pass each row to `visit` in result order, stopping
    /// early when it returns `ControlFlow::Break`. Rows are not buffered.
    ///
    /// Returns the number of rows visited.
    fn for_each_row(&mut self, sql: &str, visit: &mut RowVisitor<'_>) -> Result<usize>;
}

/// [`TableReader`] backed by a SQLite connection.
pub struct SqliteReader {
    conn: Connection,
}

impl SqliteReader {
    /// Open a database file read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::debug!("Opened SQLite database {}", path.display());
        Ok(Self { conn })
    }

    /// Wrap an existing connection (e.g. an in-memory fixture).
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl TableReader for SqliteReader {
    fn schema(&self) -> Result<LiveSchema> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, sql FROM sqlite_master WHERE type = 'table'")?;
        let tables = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(LiveSchema::from_sql(
            tables
                .into_iter()
                .filter(|(name, _)| !name.starts_with(SQLITE_INTERNAL_TABLE_PREFIX)),
        ))
    }

    fn for_each_row(&mut self, sql: &str, visit: &mut RowVisitor<'_>) -> Result<usize> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns = ColumnIndex::new(stmt.column_names().into_iter().map(String::from));
        let column_count = stmt.column_count();
        if columns.len() != column_count {
            return Err(TimelineSleuthError::Reader {
                context: "prepare query".into(),
                detail: "query projects duplicate column names".into(),
            });
        }

        let mut rows = stmt.query([])?;
        let mut values: Vec<CellValue> = Vec::with_capacity(column_count);
        let mut visited = 0usize;

        while let Some(row) = rows.next()? {
            values.clear();
            for i in 0..column_count {
                values.push(row.get::<_, rusqlite::types::Value>(i)?.into());
            }
            visited += 1;
            if visit(Row::new(&columns, &values))?.is_break() {
                break;
            }
        }

        Ok(visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> SqliteReader {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE t (id INTEGER PRIMARY KEY, name VARCHAR, ts TIMESTAMP, raw BLOB);
             INSERT INTO t VALUES (1, 'a', 1000.0, x'00');
             INSERT INTO t VALUES (2, NULL, 1.5, NULL);
             CREATE TABLE u (id INTEGER PRIMARY KEY AUTOINCREMENT);",
        )
        .unwrap();
        SqliteReader::from_connection(conn)
    }

    #[test]
    fn test_schema_skips_internal_tables() {
        let schema = reader().schema().unwrap();
        assert!(schema.has_table("t"));
        assert!(schema.has_table("U"));
        assert!(!schema.has_table("sqlite_sequence"));
        assert_eq!(schema.table_count(), 2);
    }

    #[test]
    fn test_rows_stream_with_named_access() {
        let mut reader = reader();
        let mut seen = Vec::new();
        let n = reader
            .for_each_row("SELECT id, name, ts, raw FROM t ORDER BY id", &mut |row| {
                seen.push((row.text("name")?.map(String::from), row.real("ts")?));
                Ok(ControlFlow::Continue(()))
            })
            .unwrap();
        assert_eq!(n, 2);
        // 1000.0 is stored as INTEGER under NUMERIC affinity.
        assert_eq!(seen[0], (Some("a".to_string()), Some(1000.0)));
        assert_eq!(seen[1], (None, Some(1.5)));
    }

    #[test]
    fn test_wrong_storage_class_is_field_type_error() {
        let mut reader = reader();
        let err = reader
            .for_each_row("SELECT raw FROM t WHERE id = 1", &mut |row| {
                row.text("raw")?;
                Ok(ControlFlow::Continue(()))
            })
            .unwrap_err();
        assert!(matches!(err, TimelineSleuthError::FieldType { found: "blob", .. }));
    }

    #[test]
    fn test_break_stops_streaming() {
        let mut reader = reader();
        let n = reader
            .for_each_row("SELECT id FROM t", &mut |_| Ok(ControlFlow::Break(())))
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn test_unaliased_column_matches_regardless_of_case() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE ITEMS (ID INTEGER PRIMARY KEY, KIND VARCHAR);
             INSERT INTO ITEMS (KIND) VALUES ('app');",
        )
        .unwrap();
        let mut reader = SqliteReader::from_connection(conn);
        let mut kinds = Vec::new();
        reader
            .for_each_row("SELECT KIND FROM ITEMS", &mut |row| {
                kinds.push(row.text("kind")?.map(String::from));
                kinds.push(row.text("Kind")?.map(String::from));
                Ok(ControlFlow::Continue(()))
            })
            .unwrap();
        assert_eq!(kinds, vec![Some("app".to_string()), Some("app".to_string())]);
    }

    #[test]
    fn test_unprojected_column_is_reader_error() {
        let columns = ColumnIndex::new(["a"]);
        let values = [CellValue::Integer(1)];
        let row = Row::new(&columns, &values);
        let err = row.real("missing").unwrap_err();
        assert!(matches!(err, TimelineSleuthError::Reader { .. }));
        assert!(err.is_fatal());
        assert_eq!(row.real("A").unwrap(), Some(1.0));
    }
}
