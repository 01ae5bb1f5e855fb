//! Plain-text grid rendering for table dumps.
//!
//! # Responsibility
//! - Format a `TableDump` as an aligned grid with header separators.
//!
//! # Invariants
//! - Column widths fit the widest of header and cells.
//! - NULL cells render empty, not as the word "null".

use lifedesk_core::repo::tables::TableDump;
use serde_json::Value;

/// Formats one dump as a bordered grid, one line per row.
///
/// Returns `None` when the dump has no rows.
pub fn format_table(dump: &TableDump) -> Option<String> {
    if dump.rows.is_empty() {
        return None;
    }

    let mut widths: Vec<usize> = dump.columns.iter().map(|name| name.chars().count()).collect();
    let rendered_rows: Vec<Vec<String>> = dump
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    for row in &rendered_rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let separator = grid_separator(&widths);
    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&grid_line(&dump.columns, &widths));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rendered_rows {
        out.push_str(&grid_line(row, &widths));
        out.push('\n');
    }
    out.push_str(&separator);
    Some(out)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.replace('\n', " "),
        other => other.to_string(),
    }
}

fn grid_separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn grid_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let padding = width.saturating_sub(cell.chars().count());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
        line.push_str(" |");
    }
    line
}
