//! Foreign-key resolution across loaded tables.

use crate::schema::{ForeignKeyCandidate, Table};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("column '{column}' of '{table}' references unknown table '{target}'")]
    UnknownReference {
        column: String,
        table: String,
        target: String,
    },
}

/// Bind every candidate to the table whose singular name matches,
/// recording the reference in the owning table's `foreign_keys`. An
/// unresolved candidate is a hard failure; self-references are fine here
/// (cycle detection belongs to the orderer).
pub fn resolve(tables: &mut [Table], candidates: &[ForeignKeyCandidate]) -> Result<(), ResolveError> {
    let by_singular: HashMap<String, String> = tables
        .iter()
        .map(|t| (t.singular_name.clone(), t.name.clone()))
        .collect();
    let by_name: HashMap<String, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.clone(), i))
        .collect();

    for candidate in candidates {
        let Some(target) = by_singular.get(&candidate.referenced_singular) else {
            return Err(ResolveError::UnknownReference {
                column: candidate.column_name.clone(),
                table: candidate.owning_table.clone(),
                target: candidate.referenced_singular.clone(),
            });
        };
        if let Some(&i) = by_name.get(&candidate.owning_table) {
            tables[i]
                .foreign_keys
                .insert(candidate.column_name.clone(), target.clone());
        }
    }
    Ok(())
}
