//! JSON export of every user table.
//!
//! # Responsibility
//! - Turn the whole database into one JSON document: table name to
//!   array of column-keyed row objects.
//! - Write the document to disk, pretty-printed.
//!
//! # Invariants
//! - Timestamps stay epoch-ms integers; no locale formatting.
//! - Tables are discovered dynamically, so later migrations are picked
//!   up without touching this module.

use crate::repo::tables::{fetch_table, list_tables, TableError};
use log::info;
use rusqlite::Connection;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;

pub type ExportResult<T> = Result<T, ExportError>;

/// Errors from database export.
#[derive(Debug)]
pub enum ExportError {
    Table(TableError),
    Io(io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write export file: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Table(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<TableError> for ExportError {
    fn from(value: TableError) -> Self {
        Self::Table(value)
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Builds the export document for every user table.
pub fn export_all(conn: &Connection) -> ExportResult<Value> {
    let mut document = Map::new();
    for table in list_tables(conn)? {
        let dump = fetch_table(conn, &table)?;
        let rows: Vec<Value> = dump
            .rows
            .into_iter()
            .map(|row| {
                Value::Object(
                    dump.columns
                        .iter()
                        .cloned()
                        .zip(row)
                        .collect::<Map<String, Value>>(),
                )
            })
            .collect();
        document.insert(table, Value::Array(rows));
    }
    Ok(Value::Object(document))
}

/// Writes the export document to `path` as pretty-printed JSON.
pub fn export_to_file(conn: &Connection, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let document = export_all(conn)?;
    let json = serde_json::to_string_pretty(&document)
        .map_err(|err| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))?;
    std::fs::write(path, json)?;
    info!(
        "event=export module=export status=ok path={}",
        path.display()
    );
    Ok(())
}
