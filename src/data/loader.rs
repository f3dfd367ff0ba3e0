//! Table Loader Module
//! Reads comma-delimited text into a header list and ordered rows of raw fields.
//!
//! Quoting and escaped delimiters are not supported: a field containing a
//! comma splits into two fields and the row is later dropped by the shape check.

use crate::error::AnalysisError;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// Parsed input: headers plus rows of untrimmed string fields, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a required column. Fails before any row is looked at.
    pub fn column_index(&self, name: &str) -> Result<usize, AnalysisError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AnalysisError::ColumnNotFound(name.to_string()))
    }

    /// Rows whose field count matches the header count. Everything else is
    /// the product of a bad split and is dropped whole.
    pub fn well_formed_rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        let width = self.headers.len();
        self.rows
            .iter()
            .filter(move |row| row.len() == width)
            .map(Vec::as_slice)
    }
}

/// What a load attempt produced. Only `Loaded` carries rows to analyze.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Table),
    /// Readable, header present, no data rows.
    HeaderOnly(Vec<String>),
    /// Readable but contains no lines at all.
    Empty,
    Unreadable(LoaderError),
}

impl LoadOutcome {
    pub fn into_table(self) -> Option<Table> {
        match self {
            LoadOutcome::Loaded(table) => Some(table),
            _ => None,
        }
    }
}

/// Handles reading delimited text from files or streams.
pub struct DataLoader;

impl DataLoader {
    /// Load a file. I/O failures are logged and reported as `Unreadable`.
    pub fn load_path(path: &Path) -> LoadOutcome {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                let err = LoaderError::Open {
                    path: path.to_path_buf(),
                    source,
                };
                warn!("Error reading the file: {err}");
                return LoadOutcome::Unreadable(err);
            }
        };

        let outcome = Self::load_reader(file);
        if let LoadOutcome::Loaded(table) = &outcome {
            debug!(
                "Loaded {} rows, {} columns from {}",
                table.row_count(),
                table.headers().len(),
                path.display()
            );
        }
        outcome
    }

    /// Load from any stream. The stream is consumed and dropped before returning.
    pub fn load_reader<R: Read>(reader: R) -> LoadOutcome {
        let mut text = String::new();
        if let Err(e) = BufReader::new(reader).read_to_string(&mut text) {
            let err = LoaderError::from(e);
            warn!("Error reading the file: {err}");
            return LoadOutcome::Unreadable(err);
        }

        let mut lines = split_lines(&text);
        let Some(header_line) = lines.next() else {
            return LoadOutcome::Empty;
        };

        let headers = split_line(header_line);
        let rows: Vec<Vec<String>> = lines.map(split_line).collect();

        if rows.is_empty() {
            LoadOutcome::HeaderOnly(headers)
        } else {
            LoadOutcome::Loaded(Table::new(headers, rows))
        }
    }
}

/// Lines end at `\n`, `\r\n` or a lone `\r`. A final terminator does not
/// start another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(&['\n', '\r'][..]) {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Trim the line as a whole, then split on commas. Fields keep inner padding.
fn split_line(line: &str) -> Vec<String> {
    line.trim().split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> LoadOutcome {
        DataLoader::load_reader(text.as_bytes())
    }

    #[test]
    fn splits_header_and_rows() {
        let table = load("id,age\n u1 , 20 \nu2,30\n").into_table().unwrap();
        assert_eq!(table.headers(), ["id", "age"]);
        // Only the line ends are trimmed, not each field.
        assert_eq!(table.rows()[0], ["u1 ", " 20"]);
        assert_eq!(table.rows()[1], ["u2", "30"]);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let table = load("id,age\r\nu1,20\r\n").into_table().unwrap();
        assert_eq!(table.headers(), ["id", "age"]);
        assert_eq!(table.rows(), [vec!["u1".to_string(), "20".to_string()]]);
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let table = load("id,age\ru1,20\ru2,30\r").into_table().unwrap();
        assert_eq!(table.headers(), ["id", "age"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], ["u2", "30"]);
    }

    #[test]
    fn mixed_line_endings_split_the_same_way() {
        let table = load("id,age\r\nu1,20\ru2,30\nu3,40").into_table().unwrap();
        let ids: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, ["u1", "u2", "u3"]);
    }

    #[test]
    fn blank_line_becomes_single_field_row() {
        let table = load("id,age\n\nu1,20\n").into_table().unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], [""]);
        assert_eq!(table.well_formed_rows().count(), 1);
    }

    #[test]
    fn header_only_and_empty_are_distinguished() {
        assert!(matches!(load("id,age\n"), LoadOutcome::HeaderOnly(h) if h == ["id", "age"]));
        assert!(matches!(load(""), LoadOutcome::Empty));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let outcome = DataLoader::load_path(Path::new("/definitely/not/here.csv"));
        assert!(matches!(outcome, LoadOutcome::Unreadable(LoaderError::Open { .. })));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let bytes: &[u8] = b"id,age\n\xff\xfe,1\n";
        assert!(matches!(
            DataLoader::load_reader(bytes),
            LoadOutcome::Unreadable(LoaderError::Read(_))
        ));
    }

    #[test]
    fn column_lookup_fails_fast() {
        let table = Table::new(vec!["id".into()], vec![vec!["a".into()]]);
        assert_eq!(table.column_index("id"), Ok(0));
        assert_eq!(
            table.column_index("income"),
            Err(AnalysisError::ColumnNotFound("income".to_string()))
        );
    }

    #[test]
    fn rows_with_wrong_width_are_not_well_formed() {
        let table = load("a,b\n1,2\n1,2,3\n1\n").into_table().unwrap();
        let kept: Vec<_> = table.well_formed_rows().collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], ["1", "2"]);
    }
}
