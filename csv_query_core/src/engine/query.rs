use std::fs;
use std::path::Path;

use tracing::debug;

use crate::engine::filter_project::{filter_rows, project};
use crate::engine::format::format_select;
use crate::engine::resolve::resolve;
use crate::error::{QueryError, Result};
use crate::parser::{check_quotes, compile, read_records, split_selection};
use crate::types::Table;

/// Column names and projected rows borrowed from the source table
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    pub columns: Vec<&'a str>,
    pub rows: Vec<Vec<&'a str>>,
}

impl Projection<'_> {
    pub fn format(&self) -> String {
        format_select(self.columns.as_slice(), self.rows.as_slice())
    }
}

/// Runs resolve -> compile -> filter -> project over an already parsed table.
pub fn select<'a>(
    table: &'a Table,
    selected_columns: &str,
    row_filter_definitions: &str,
) -> Result<Projection<'a>> {
    let header = table.header();

    let selection = split_selection(selected_columns);
    let indices = resolve(header, &selection)?;
    debug!(?indices, "resolved column selection");

    let filters = compile(header, row_filter_definitions)?;

    let passing = filter_rows(table.rows(), &filters);
    debug!(
        total = table.row_count(),
        passing = passing.len(),
        "applied row filters"
    );

    let columns = project(header.columns(), &indices);
    let rows = passing
        .into_iter()
        .map(|row| project(row.as_slice(), &indices))
        .collect();

    Ok(Projection { columns, rows })
}

/// Loads a CSV file through a real CSV reader, keeping the table invariants.
pub fn load_table(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path).map_err(|source| QueryError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    check_quotes(&text)?;

    let records = read_records(text.as_bytes()).map_err(|e| QueryError::FileAccess {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    debug!(path = %path.display(), records = records.len(), "read CSV file");

    Ok(Table::from_records(records)?)
}
