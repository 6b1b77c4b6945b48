use crate::error::{QueryError, Result};
use crate::types::Header;

/// Maps requested column names to header positions, preserving request order.
/// An empty selection resolves to every column. Fails on the first unknown name.
pub fn resolve(header: &Header, selection: &[String]) -> Result<Vec<usize>> {
    if selection.is_empty() {
        return Ok((0..header.column_count()).collect());
    }

    selection
        .iter()
        .map(|name| {
            header
                .position(name)
                .ok_or_else(|| QueryError::UnknownColumn {
                    name: name.clone(),
                    clause: "column selection",
                })
        })
        .collect()
}
