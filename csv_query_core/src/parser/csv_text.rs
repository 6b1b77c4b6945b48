use std::io;

use crate::error::ParseError;
use crate::types::{Row, Table};

/// Splits raw CSV text into a header and rows.
///
/// Records are separated by `\n` (a trailing `\r` is dropped) and fields by `,`.
/// There is no quoting: every comma is a delimiter. A single trailing newline does
/// not produce an empty row.
pub fn parse(text: &str) -> Result<Table, ParseError> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    if strip_cr(body).is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let records = body
        .split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, split_record(line)));

    Table::from_records(records)
}

fn split_record(line: &str) -> Row {
    strip_cr(line).split(',').map(str::to_string).collect()
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[derive(Clone, Copy, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
}

/// Rejects CSV text whose last quoted field never closes. A `"` only opens a
/// quoted field at the start of a field; `""` inside quotes is an escaped quote.
pub fn check_quotes(text: &str) -> Result<(), ParseError> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1usize;
    let mut opened_on = 1usize;

    let mut it = text.chars().peekable();
    while let Some(ch) = it.next() {
        state = match (state, ch) {
            (QuoteState::Quoted, '"') => {
                if it.peek() == Some(&'"') {
                    it.next();
                    QuoteState::Quoted
                } else {
                    QuoteState::Unquoted
                }
            }
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::FieldStart, '"') => {
                opened_on = line;
                QuoteState::Quoted
            }
            (_, ',') | (_, '\n') => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };
        if ch == '\n' {
            line += 1;
        }
    }

    if state == QuoteState::Quoted {
        return Err(ParseError::UnterminatedQuote { line: opened_on });
    }
    Ok(())
}

/// Reads numbered records from a real CSV source (quoted fields allowed, blank
/// lines skipped). Field counts are left unchecked here so `Table::from_records`
/// reports them the same way it does for in-memory text.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<(usize, Row)>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records: Vec<(usize, Row)> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(i + 1, |p| p.line() as usize);
        records.push((line, record.iter().map(str::to_string).collect()));
    }
    Ok(records)
}
