// File: crates/rps-chart/src/aggregate.rs
// Summary: Reads `<requestType>,<veCount>,<maxRps>` CSV rows into per-request-type lines.

use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info};

/// Number of fields every row must carry.
pub const FIELDS_PER_ROW: usize = 3;

/// Measured points for one request type. `x_values` and `y_values` always have equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl Line {
    pub fn push(&mut self, x: f64, y: f64) {
        self.x_values.push(x);
        self.y_values.push(y);
    }

    /// VE counts, in row order.
    pub fn x_values(&self) -> &[f64] { &self.x_values }

    /// Max RPS values, in row order.
    pub fn y_values(&self) -> &[f64] { &self.y_values }

    pub fn len(&self) -> usize { self.x_values.len() }

    pub fn is_empty(&self) -> bool { self.x_values.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values.iter().copied().zip(self.y_values.iter().copied())
    }
}

/// Lines keyed by request type, iterated in the order keys first appeared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesCollection {
    lines: IndexMap<String, Line>,
}

impl SeriesCollection {
    pub fn new() -> Self { Self::default() }

    /// Append a point to the line for `key`. Returns true when the line was created.
    pub fn push(&mut self, key: &str, x: f64, y: f64) -> bool {
        let created = !self.lines.contains_key(key);
        self.lines.entry(key.to_owned()).or_default().push(x, y);
        created
    }

    pub fn get(&self, key: &str) -> Option<&Line> { self.lines.get(key) }

    pub fn len(&self) -> usize { self.lines.len() }

    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.keys().map(String::as_str)
    }

    /// Lines in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Line)> + '_ {
        self.lines.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Lines ordered lexicographically by key.
    pub fn sorted_by_key(&self) -> Vec<(&str, &Line)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {input}")]
    Io {
        input: String,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected 3 fields, found {fields}")]
    MalformedRow { line: u64, fields: usize },

    #[error("line {line}, column {column}: {value:?} is not a number")]
    InvalidNumber {
        line: u64,
        column: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parse the CSV file at `path`. The file is closed before this returns, on every path.
pub fn parse(path: impl AsRef<Path>) -> Result<SeriesCollection, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ParseError::FileNotFound { path: path.to_path_buf() },
        _ => ParseError::Io { input: path.display().to_string(), source: e.into() },
    })?;
    read_records(file, &path.display().to_string())
}

/// Same as [`parse`] over an already open reader.
pub fn parse_reader<R: io::Read>(reader: R) -> Result<SeriesCollection, ParseError> {
    read_records(reader, "<reader>")
}

fn read_records<R: io::Read>(reader: R, input: &str) -> Result<SeriesCollection, ParseError> {
    // flexible: field counts are checked per row below, with our own error
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut lines = SeriesCollection::new();
    // bytes, so a key that is not UTF-8 still groups rows instead of failing the read
    let mut record = csv::ByteRecord::new();
    let mut rows = 0u64;

    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(source) => return Err(ParseError::Io { input: input.to_owned(), source }),
        }
        rows += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(rows);
        let (key, x, y) = parse_row(&record, line)?;
        if lines.push(&key, x, y) {
            debug!(key = %key, line, "new series");
        }
    }

    info!(input, rows, series = lines.len(), "parsed requests CSV");
    Ok(lines)
}

fn parse_row(record: &csv::ByteRecord, line: u64) -> Result<(Cow<'_, str>, f64, f64), ParseError> {
    if record.len() != FIELDS_PER_ROW {
        return Err(ParseError::MalformedRow { line, fields: record.len() });
    }
    let number = |column: usize| -> Result<f64, ParseError> {
        // invalid bytes become U+FFFD, which never parses as a number
        let value = String::from_utf8_lossy(&record[column - 1]);
        value.parse::<f64>().map_err(|source| ParseError::InvalidNumber {
            line,
            column,
            value: value.into_owned(),
            source,
        })
    };
    // VE count, then max RPS
    let x = number(2)?;
    let y = number(3)?;
    Ok((String::from_utf8_lossy(&record[0]), x, y))
}
