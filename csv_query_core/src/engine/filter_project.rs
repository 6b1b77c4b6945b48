use tracing::trace;

use crate::parser::command::{FilterSet, Predicate};
use crate::types::value::compare_field;
use crate::types::Row;

/// True when `row` satisfies every predicate in `filters`.
pub fn passes(row: &[String], filters: &FilterSet) -> bool {
    filters.predicates().iter().all(|p| row_matches(row, p))
}

fn row_matches(row: &[String], predicate: &Predicate) -> bool {
    // Tables are shape-checked at parse time, so the index is always in range.
    let Some(cell) = row.get(predicate.index) else {
        return false;
    };
    let ord = compare_field(cell, &predicate.value, predicate.number());
    predicate.op.accepts(ord)
}

/// Keeps the rows that pass `filters`, in input order.
pub fn filter_rows<'a>(rows: &'a [Row], filters: &FilterSet) -> Vec<&'a Row> {
    if filters.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .enumerate()
        .filter(|(i, row)| {
            let keep = passes(row, filters);
            if !keep {
                trace!(row = i, "row rejected by filters");
            }
            keep
        })
        .map(|(_, row)| row)
        .collect()
}

/// Picks the fields at `indices`, in that order. Indices may repeat;
/// indices past the end of `row` are skipped.
pub fn project<'a>(row: &'a [String], indices: &[usize]) -> Vec<&'a str> {
    indices
        .iter()
        .filter_map(|&idx| row.get(idx).map(String::as_str))
        .collect()
}
