//! Table loading: one tabular source to one typed table.

use crate::schema::{Column, ColumnState, ForeignKeyCandidate, Table};
use crate::source::TabularSource;
use crate::value::{ClassifyError, Value, classify};
use thiserror::Error;

/// Column-name suffix marking a foreign-key reference by convention.
pub const FK_SUFFIX: &str = "_id";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("source '{table}' has no header row")]
    EmptySource { table: String },
    #[error("row {row} of '{table}' has {found} cells, expected {expected}")]
    MalformedRow {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("column '{column}' of '{table}': {source}")]
    TypeConflict {
        table: String,
        column: String,
        #[source]
        source: ClassifyError,
    },
}

/// Load one source end-to-end: header to columns, data rows to typed
/// values. Column 0 becomes the primary key; any later header ending in
/// `_id` is reported as a foreign-key candidate for the resolver.
pub fn load(source: &TabularSource) -> Result<(Table, Vec<ForeignKeyCandidate>), LoadError> {
    let mut records = source.records.iter();
    let header = records
        .next()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| LoadError::EmptySource {
            table: source.name.clone(),
        })?;

    let mut table = Table::new(&source.name);
    let mut candidates = Vec::new();
    for (i, name) in header.iter().enumerate() {
        table.columns.push(Column::new(name, i == 0));
        if i == 0 {
            continue;
        }
        if let Some(target) = name.strip_suffix(FK_SUFFIX) {
            candidates.push(ForeignKeyCandidate {
                column_name: name.clone(),
                owning_table: table.name.clone(),
                referenced_singular: target.to_string(),
            });
        }
    }

    for (row_idx, record) in records.enumerate() {
        if record.len() != table.columns.len() {
            return Err(LoadError::MalformedRow {
                table: table.name.clone(),
                row: row_idx + 1,
                expected: table.columns.len(),
                found: record.len(),
            });
        }
        let mut row = Vec::with_capacity(record.len());
        for (i, cell) in record.iter().enumerate() {
            let column = &mut table.columns[i];
            if cell.is_empty() {
                column.is_nullable = true;
                row.push(Value::Null);
                continue;
            }
            let (value, tag) =
                classify(cell, column.state.tag()).map_err(|source| LoadError::TypeConflict {
                    table: table.name.clone(),
                    column: column.name.clone(),
                    source,
                })?;
            column.state = ColumnState::Fixed(tag);
            row.push(value);
        }
        table.rows.push(row);
    }

    Ok((table, candidates))
}
