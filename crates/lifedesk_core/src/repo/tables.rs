//! Generic, name-driven table access for viewing, searching and export.
//!
//! # Responsibility
//! - Dump whole tables with their column names.
//! - Run keyword (LIKE) searches over one user-chosen column.
//!
//! # Invariants
//! - User-typed table/column names are validated against `sqlite_master`
//!   and `PRAGMA table_info` before being spliced into SQL.
//! - Internal `sqlite_*` tables are never exposed.

use crate::db::DbError;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Statement};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

pub type TableResult<T> = Result<T, TableError>;

/// Errors from name-driven table operations.
#[derive(Debug)]
pub enum TableError {
    /// Requested table does not exist.
    UnknownTable(String),
    /// Requested column does not exist in the table.
    UnknownColumn { table: String, column: String },
    Db(DbError),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTable(table) => write!(f, "no such table: {table}"),
            Self::UnknownColumn { table, column } => {
                write!(f, "no column `{column}` in table `{table}`")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownTable(_) => None,
            Self::UnknownColumn { .. } => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for TableError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for TableError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One table's column names and row values.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDump {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Lists user table names, alphabetically.
pub fn list_tables(conn: &Connection) -> TableResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name
         FROM sqlite_master
         WHERE type = 'table'
           AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
         ORDER BY name ASC;",
    )?;
    let mut rows = stmt.query([])?;
    let mut names = Vec::new();
    while let Some(row) = rows.next()? {
        names.push(row.get::<_, String>(0)?);
    }
    Ok(names)
}

/// Dumps all rows of one table.
pub fn fetch_table(conn: &Connection, table: &str) -> TableResult<TableDump> {
    ensure_table(conn, table)?;
    let mut stmt = conn.prepare(&format!("SELECT * FROM {table};"))?;
    collect_dump(table, &mut stmt, None)
}

/// Dumps rows of one table whose `column` contains `keyword`.
///
/// Matching is SQLite `LIKE '%keyword%'`, case-insensitive for ASCII.
pub fn search_table(
    conn: &Connection,
    table: &str,
    column: &str,
    keyword: &str,
) -> TableResult<TableDump> {
    ensure_table(conn, table)?;
    ensure_column(conn, table, column)?;
    let mut stmt = conn.prepare(&format!("SELECT * FROM {table} WHERE {column} LIKE ?1;"))?;
    collect_dump(table, &mut stmt, Some(format!("%{keyword}%")))
}

fn collect_dump(
    table: &str,
    stmt: &mut Statement<'_>,
    pattern: Option<String>,
) -> TableResult<TableDump> {
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let column_count = columns.len();

    let mut rows = match pattern {
        Some(pattern) => stmt.query([pattern])?,
        None => stmt.query([])?,
    };

    let mut dump_rows = Vec::new();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for index in 0..column_count {
            values.push(cell_to_json(row.get_ref(index)?));
        }
        dump_rows.push(values);
    }

    Ok(TableDump {
        name: table.to_string(),
        columns,
        rows: dump_rows,
    })
}

fn cell_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(value) => Value::from(value),
        ValueRef::Real(value) => serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::String(to_hex(bytes)),
    }
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

fn ensure_table(conn: &Connection, table: &str) -> TableResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table'
              AND name = ?1
              AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists == 1 {
        Ok(())
    } else {
        Err(TableError::UnknownTable(table.to_string()))
    }
}

fn ensure_column(conn: &Connection, table: &str, column: &str) -> TableResult<()> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(());
        }
    }
    Err(TableError::UnknownColumn {
        table: table.to_string(),
        column: column.to_string(),
    })
}
