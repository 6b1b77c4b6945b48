use std::collections::HashSet;

use crate::error::ParseError;
use crate::types::Row;

/// Ordered, unique column names taken from the first CSV record
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    /// Builds a header, rejecting duplicate names (case-sensitive)
    pub fn new(columns: Vec<String>) -> Result<Self, ParseError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(ParseError::DuplicateColumn { name: name.clone() });
            }
        }
        Ok(Self { columns })
    }

    /// Zero-based position of `name`, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of columns in this header
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// A parsed CSV document. Every row has exactly `header.column_count()` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Header,
    rows: Vec<Row>,
}

impl Table {
    /// Assembles a table from numbered records. The first record is the header;
    /// `line` numbers are only used for error reporting.
    pub fn from_records<I>(records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (usize, Row)>,
    {
        let mut it = records.into_iter();
        let (_, first) = it.next().ok_or(ParseError::EmptyInput)?;
        let header = Header::new(first)?;
        let expected = header.column_count();

        let mut rows: Vec<Row> = Vec::new();
        for (line, row) in it {
            if row.len() != expected {
                return Err(ParseError::FieldCount {
                    line,
                    expected,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
