use std::path::Path;

use tracing::debug;

pub mod engine;
pub mod error;
pub mod parser;
pub mod types;

pub use error::{ParseError, QueryError, Result};
pub use types::{Header, Row, Table};

/// Filters and projects in-memory CSV text.
///
/// `selected_columns` is a comma-separated column list (empty selects all columns);
/// `row_filter_definitions` holds one `column<op>literal` per line, AND-combined.
/// Returns the header line of the selection followed by one line per passing row.
pub fn process_csv(
    csv_data: &str,
    selected_columns: &str,
    row_filter_definitions: &str,
) -> Result<String> {
    let table = parser::parse(csv_data)?;
    debug!(rows = table.row_count(), "parsed CSV text");
    let projection = engine::select(&table, selected_columns, row_filter_definitions)?;
    Ok(projection.format())
}

/// Same as `process_csv`, reading the CSV from `path`. Open and read failures
/// surface as `QueryError::FileAccess`.
pub fn process_csv_file(
    path: impl AsRef<Path>,
    selected_columns: &str,
    row_filter_definitions: &str,
) -> Result<String> {
    let table = engine::load_table(path.as_ref())?;
    let projection = engine::select(&table, selected_columns, row_filter_definitions)?;
    Ok(projection.format())
}
