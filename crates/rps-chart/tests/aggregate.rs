// File: crates/rps-chart/tests/aggregate.rs
// Purpose: File-level aggregation properties (grouping, ordering, failure modes).

use std::io::Write;

use rps_chart::{parse, ParseError};

fn csv_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write csv");
    f.flush().expect("flush");
    f
}

#[test]
fn one_line_per_request_type_with_matching_lengths() {
    let rows = [
        ("GET", 1.0, 10.0),
        ("POST", 1.0, 5.0),
        ("GET", 2.0, 19.0),
        ("PUT", 4.0, 7.0),
        ("GET", 4.0, 33.0),
        ("POST", 8.0, 9.0),
    ];
    let text: String = rows.iter().map(|(k, x, y)| format!("{k},{x},{y}\n")).collect();
    let file = csv_file(&text);

    let lines = parse(file.path()).expect("parse");
    assert_eq!(lines.len(), 3);
    for key in ["GET", "POST", "PUT"] {
        let line = lines.get(key).expect("line exists");
        let expected: Vec<_> = rows.iter().filter(|r| r.0 == key).map(|r| (r.1, r.2)).collect();
        assert_eq!(line.x_values().len(), line.y_values().len());
        assert_eq!(line.len(), expected.len());
        // row order preserved
        assert_eq!(line.points().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn empty_file_is_empty_collection() {
    let file = csv_file("");
    assert!(parse(file.path()).expect("parse").is_empty());
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = parse(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, ParseError::FileNotFound { .. }), "{err:?}");
}

#[test]
fn directory_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = parse(dir.path()).unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }), "{err:?}");
}

#[test]
fn bad_row_anywhere_fails_whole_parse() {
    let file = csv_file("A,1,100\nA,2,200\nA,3\nA,4,400\n");
    assert!(matches!(parse(file.path()), Err(ParseError::MalformedRow { line: 3, fields: 2 })));

    let file = csv_file("A,1,100\nB,x,200\n");
    assert!(matches!(parse(file.path()), Err(ParseError::InvalidNumber { line: 2, column: 2, .. })));
}
