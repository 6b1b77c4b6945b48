use tracing::debug;

use crate::error::{QueryError, Result};
use crate::parser::command::{CompareOp, FilterSet, Predicate};
use crate::types::Header;

/// Compiles newline-separated `column<op>literal` expressions into a `FilterSet`.
///
/// Blank lines are skipped, so an empty definition string compiles to an empty set.
pub fn compile(header: &Header, definitions: &str) -> Result<FilterSet> {
    let mut predicates: Vec<Predicate> = Vec::new();

    for raw in definitions.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        predicates.push(compile_expression(header, line)?);
    }

    debug!(count = predicates.len(), "compiled row filters");
    Ok(FilterSet::new(predicates))
}

fn compile_expression(header: &Header, expression: &str) -> Result<Predicate> {
    let (pos, op) = find_operator(expression).ok_or_else(|| QueryError::FilterSyntax {
        expression: expression.to_string(),
    })?;

    let column = &expression[..pos];
    let value = &expression[pos + op.token().len()..];

    let index = header
        .position(column)
        .ok_or_else(|| QueryError::UnknownColumn {
            name: column.to_string(),
            clause: "row filter",
        })?;

    Ok(Predicate::new(column, index, op, value))
}

/// Finds the first byte offset where an operator token starts, preferring the
/// longest token at that offset.
fn find_operator(expression: &str) -> Option<(usize, CompareOp)> {
    for (pos, _) in expression.char_indices() {
        let rest = &expression[pos..];
        for (token, op) in CompareOp::TOKENS {
            if rest.starts_with(token) {
                return Some((pos, op));
            }
        }
    }
    None
}
