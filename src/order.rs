//! Dependency ordering of resolved tables.

use crate::schema::Table;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("cyclic foreign-key dependency among tables: {}", .0.join(", "))]
    CyclicDependency(Vec<String>),
}

/// Order tables so that every referenced table precedes its referents.
/// Among simultaneously ready tables, discovery order wins. A table's
/// reference to itself is not a dependency.
pub fn order(tables: Vec<Table>) -> Result<Vec<Table>, OrderError> {
    let index: HashMap<&str, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.as_str(), i))
        .collect();

    let mut deps: Vec<HashSet<usize>> = vec![HashSet::new(); tables.len()];
    for (i, table) in tables.iter().enumerate() {
        for target in table.foreign_keys.values() {
            if let Some(&j) = index.get(target.as_str()) {
                if j != i {
                    deps[i].insert(j);
                }
            }
        }
    }

    let mut placed = vec![false; tables.len()];
    let mut sequence = Vec::with_capacity(tables.len());
    while sequence.len() < tables.len() {
        let mut progressed = false;
        for i in 0..tables.len() {
            if placed[i] || !deps[i].iter().all(|&j| placed[j]) {
                continue;
            }
            placed[i] = true;
            sequence.push(i);
            progressed = true;
        }
        if !progressed {
            let stuck = tables
                .iter()
                .zip(&placed)
                .filter(|&(_, &done)| !done)
                .map(|(t, _)| t.name.clone())
                .collect();
            return Err(OrderError::CyclicDependency(stuck));
        }
    }

    let mut slots: Vec<Option<Table>> = tables.into_iter().map(Some).collect();
    Ok(sequence
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect())
}
