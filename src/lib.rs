//! CSV to relational schema synthesis.
//!
//! Scans tabular sources, infers a type and nullability for every column,
//! derives primary/foreign keys from naming convention, orders tables by
//! dependency, and renders DDL plus INSERT scripts.
//!
//! Conventions carried from the source format: column 0 of every table is
//! the primary key; a column named `<x>_id` references the table whose
//! singular name is `<x>`; a table's singular name is its name minus one
//! trailing character.

pub mod loader;
pub mod order;
pub mod resolver;
pub mod schema;
pub mod source;
pub mod sql;
pub mod value;

use thiserror::Error;

use loader::LoadError;
use order::OrderError;
use resolver::ResolveError;
use schema::ForeignKeyCandidate;
use source::TabularSource;
use sql::Dialect;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Generated script set, both halves in dependency order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scripts {
    pub ddl: Vec<String>,
    pub inserts: Vec<String>,
}

/// Run the whole pipeline over a set of sources. The first error in any
/// phase aborts the run; there is no partial output.
pub fn synthesize(sources: &[TabularSource], dialect: Dialect) -> Result<Scripts, PipelineError> {
    let mut tables = Vec::new();
    let mut candidates: Vec<ForeignKeyCandidate> = Vec::new();
    for src in sources {
        let (table, fks) = loader::load(src)?;
        tables.push(table);
        candidates.extend(fks);
    }

    resolver::resolve(&mut tables, &candidates)?;
    let ordered = order::order(tables)?;
    let (ddl, inserts) = sql::generate(&ordered, dialect);
    Ok(Scripts { ddl, inserts })
}
