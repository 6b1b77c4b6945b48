use super::*;

#[test]
fn file_no_filters_all_columns() -> anyhow::Result<()> {
    let csv = TempCsv::new("header1,header2,header3\n1,2,3\n4,5,6\n");
    let out = process_csv_file(&csv.path, "", "")?;
    assert_eq!(out, "header1,header2,header3\n1,2,3\n4,5,6\n");
    Ok(())
}

#[test]
fn file_with_filters_and_selection() -> anyhow::Result<()> {
    let csv = TempCsv::new("header1,header2,header3\n1,2,3\n4,5,6\n");
    assert_eq!(
        process_csv_file(&csv.path, "header1,header3", "header1>1")?,
        "header1,header3\n4,6\n"
    );
    assert_eq!(
        process_csv_file(&csv.path, "header2,header3", "header1>1")?,
        "header2,header3\n5,6\n"
    );
    assert_eq!(
        process_csv_file(&csv.path, "", "header1=10")?,
        "header1,header2,header3\n"
    );
    Ok(())
}

#[test]
fn file_matches_in_memory_sample() -> anyhow::Result<()> {
    let csv = TempCsv::new(SAMPLE_CSV);
    let columns = "col1,col3,col4,col7";
    let filters = "col1>l1c1\ncol3>l1c3";

    assert_eq!(
        process_csv_file(&csv.path, columns, filters)?,
        process_csv(SAMPLE_CSV, columns, filters)?
    );
    Ok(())
}

#[test]
fn file_reader_unquotes_fields() -> anyhow::Result<()> {
    let csv = TempCsv::new("name,note\n\"smith, j\",ok\nlee,\"said \"\"hi\"\"\"\n");
    let out = process_csv_file(&csv.path, "note,name", "")?;
    assert_eq!(out, "note,name\nok,smith, j\nsaid \"hi\",lee\n");
    Ok(())
}

#[test]
fn file_reader_accepts_crlf() -> anyhow::Result<()> {
    let csv = TempCsv::new("a,b\r\n1,2\r\n3,4\r\n");
    assert_eq!(process_csv_file(&csv.path, "b", "a>1")?, "b\n4\n");
    Ok(())
}

#[test]
fn file_with_short_row_is_parse_error() {
    let csv = TempCsv::new("a,b,c\n1,2,3\n4,5\n");
    let err = process_csv_file(&csv.path, "", "").unwrap_err();
    assert!(matches!(
        err,
        QueryError::Parse(ParseError::FieldCount {
            line: 3,
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn empty_file_is_parse_error() {
    let csv = TempCsv::new("");
    let err = process_csv_file(&csv.path, "", "").unwrap_err();
    assert!(matches!(err, QueryError::Parse(ParseError::EmptyInput)));
}

#[test]
fn missing_file_is_file_access_error() {
    let mut path = std::env::temp_dir();
    path.push(format!("csv_query_missing_{}.csv", std::process::id()));

    let err = process_csv_file(&path, "", "").unwrap_err();
    match &err {
        QueryError::FileAccess { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileAccess, got {other:?}"),
    }
    assert!(err.to_string().contains("csv_query_missing_"));
}

#[test]
fn file_with_unterminated_quote_is_parse_error() {
    let csv = TempCsv::new("a,b\n1,\"2\n");
    let err = process_csv_file(&csv.path, "", "").unwrap_err();
    assert!(matches!(
        err,
        QueryError::Parse(ParseError::UnterminatedQuote { line: 2 })
    ));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn file_reader_keeps_quote_inside_unquoted_field() -> anyhow::Result<()> {
    let csv = TempCsv::new("size,name\n5\",pipe\n");
    assert_eq!(process_csv_file(&csv.path, "size", "")?, "size\n5\"\n");
    Ok(())
}

#[test]
fn bundled_demo_file_matches_in_memory_sample() -> anyhow::Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../csv_query_cli/data.csv");
    let columns = "col1,col3,col4,col7";
    let filters = "col1>l1c1\ncol3>l1c3";

    assert_eq!(std::fs::read_to_string(path)?, SAMPLE_CSV);
    assert_eq!(
        process_csv_file(path, columns, filters)?,
        process_csv(SAMPLE_CSV, columns, filters)?
    );
    Ok(())
}
