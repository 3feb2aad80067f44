//! Tabular input sources.
//!
//! The core pipeline consumes plain in-memory records; this module is the
//! CSV-shaped edge that produces them. Directory traversal stays in the CLI.

use csv::{Reader, ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot derive a table name from path '{0}'")]
    NoName(String),
}

/// A named sequence of delimited records. The first record is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularSource {
    pub name: String,
    pub records: Vec<Vec<String>>,
}

impl TabularSource {
    pub fn new(name: impl Into<String>, records: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Read a CSV document from any reader. Surrounding whitespace in
    /// fields is trimmed; ragged rows are passed through for the loader
    /// to report with table context.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self, SourceError> {
        let rdr = reader_builder().from_reader(reader);
        Ok(Self::new(name, collect_records(rdr)?))
    }

    /// Read a CSV file; the table name is the file stem.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SourceError::NoName(path.display().to_string()))?
            .to_string();
        let rdr = reader_builder().from_path(path)?;
        Ok(Self::new(name, collect_records(rdr)?))
    }
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(Trim::Fields);
    builder
}

fn collect_records<R: Read>(mut rdr: Reader<R>) -> Result<Vec<Vec<String>>, SourceError> {
    let mut records = Vec::new();
    for record in rdr.records() {
        let record = record?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_reader() {
        let csv = "author_id,name\n1, Ada\n2,Grace\n";
        let source = TabularSource::from_reader("authors", Cursor::new(csv)).unwrap();
        assert_eq!(source.name, "authors");
        assert_eq!(source.records.len(), 3);
        assert_eq!(source.records[0], vec!["author_id", "name"]);
        // leading whitespace after the delimiter is trimmed
        assert_eq!(source.records[1], vec!["1", "Ada"]);
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let csv = "a,b\n1\n";
        let source = TabularSource::from_reader("t", Cursor::new(csv)).unwrap();
        assert_eq!(source.records[1], vec!["1"]);
    }

    #[test]
    fn test_empty_cells_preserved() {
        let csv = "a,b\n1,\n";
        let source = TabularSource::from_reader("t", Cursor::new(csv)).unwrap();
        assert_eq!(source.records[1], vec!["1", ""]);
    }
}
