//! Relational schema model built up from tabular sources.

use crate::value::{TypeTag, Value};
use std::collections::BTreeMap;

/// Column typing state. The first non-empty cell fixes the tag for the
/// column's lifetime; later cells must re-parse under the fixed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnState {
    #[default]
    Unset,
    Fixed(TypeTag),
}

impl ColumnState {
    pub fn tag(&self) -> Option<TypeTag> {
        match self {
            Self::Unset => None,
            Self::Fixed(tag) => Some(*tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub state: ColumnState,
    pub is_primary_key: bool,
    pub is_nullable: bool,
}

impl Column {
    pub fn new(name: &str, is_primary_key: bool) -> Self {
        Self {
            name: name.to_string(),
            state: ColumnState::Unset,
            is_primary_key,
            is_nullable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Plural table name, taken from the source name (e.g. "users").
    pub name: String,
    /// Name minus one trailing character, used as a foreign-key target.
    pub singular_name: String,
    /// Column 0 is the primary key by convention.
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
    /// Column name -> referenced table name, filled in by the resolver.
    pub foreign_keys: BTreeMap<String, String>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            singular_name: singularize(name),
            columns: Vec::new(),
            rows: Vec::new(),
            foreign_keys: BTreeMap::new(),
        }
    }

    /// Name of the primary-key column, when the table has columns at all.
    pub fn primary_key(&self) -> Option<&str> {
        self.columns.first().map(|c| c.name.as_str())
    }
}

/// Strip one trailing character: "users" -> "user". A naming convention,
/// not real pluralization; irregular plurals are out of scope.
pub fn singularize(name: &str) -> String {
    let mut singular = name.to_string();
    singular.pop();
    singular
}

/// A column suspected (by the `_id` suffix convention) to reference
/// another table's primary key, pending resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyCandidate {
    pub column_name: String,
    pub owning_table: String,
    pub referenced_singular: String,
}
