use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised while splitting raw text into a header and rows.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("CSV input is empty: no header row")]
    EmptyInput,

    #[error("Row on line {line} has {found} fields but the header has {expected}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate column '{name}' in header")]
    DuplicateColumn { name: String },

    #[error("Quoted field opened on line {line} is never closed")]
    UnterminatedQuote { line: usize },
}

/// Every way a single query can fail. All of them are terminal for the query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown column '{name}' in {clause}")]
    UnknownColumn { name: String, clause: &'static str },

    #[error("Invalid filter '{expression}'. Use <column><op><value> with op one of >=|<=|!=|>|<|=")]
    FilterSyntax { expression: String },

    #[error("Failed to read file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
