/// Formats a query result as comma-separated lines: a header line with the
/// selected column names, then one line per row. Every line ends with `\n`.
/// Fields are emitted as-is, without quoting.
pub fn format_select<S: AsRef<str>>(columns: &[S], rows: &[Vec<&str>]) -> String {
    let mut out = join_line(columns);
    for row in rows {
        out.push_str(&join_line(row.as_slice()));
    }
    out
}

fn join_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}
