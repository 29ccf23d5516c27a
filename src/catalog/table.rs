//! Table Module
//!
//! Table-specific payload and the column provenance rules for inheritance.

use serde::{Serialize, Deserialize};
use crate::common::types::Identity;
use super::column::{Column, ColumnMap};

/// Table-specific attributes of a schema object
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableDef {
    /// Identities of the tables this table inherits from, in declaration order
    parent_tables: Vec<Identity>,
    /// Whether the table skips the write-ahead log
    is_unlogged: bool,
}

impl TableDef {
    pub fn new(parent_tables: Vec<Identity>, is_unlogged: bool) -> Self {
        TableDef {
            parent_tables,
            is_unlogged,
        }
    }

    /// Get the parent tables
    pub fn parent_tables(&self) -> &[Identity] {
        &self.parent_tables
    }

    pub fn is_unlogged(&self) -> bool {
        self.is_unlogged
    }
}

/// Order a child table's columns: inherited columns first, following each
/// parent's column order (parents in declaration order), then inherited columns
/// no parent accounts for, then the child's own columns. Inherited leftovers and
/// local columns keep catalog ordinal order.
pub(crate) fn order_inherited_columns(columns: &ColumnMap, parents: &[&ColumnMap]) -> ColumnMap {
    let mut ordered = ColumnMap::new();

    for parent in parents {
        for name in parent.keys() {
            if ordered.contains_key(name) {
                continue;
            }
            if let Some(column) = columns.get(name).filter(|c| c.is_inherited()) {
                ordered.insert(name.clone(), column.clone());
            }
        }
    }

    let mut rest: Vec<&Column> = columns
        .values()
        .filter(|c| !ordered.contains_key(c.name()))
        .collect();
    // Stable sort: inherited before local, then by ordinal
    rest.sort_by_key(|c| (!c.is_inherited(), c.ordinal()));

    for column in rest {
        ordered.insert(column.name().to_string(), column.clone());
    }
    ordered
}
