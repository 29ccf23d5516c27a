// Column Module
//
// This module defines the Column type shared by tables, views and the result
// shape of functions.

use linked_hash_map::LinkedHashMap;
use serde::{Serialize, Deserialize};

/// Ordered mapping from column name to column, in the object's column order
pub type ColumnMap = LinkedHashMap<String, Column>;

/// Represents one column of a table, view or function result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    name: String,
    /// Formatted type name as the catalog reports it (e.g. `character varying(255)`)
    data_type: String,
    /// Whether this column can contain NULL values
    nullable: bool,
    /// Default expression (if any)
    default: Option<String>,
    /// Position reported by the catalog (1-based attribute number)
    ordinal: i32,
    /// Whether the column comes from a parent table
    is_inherited: bool,
    /// Explicit collation, when different from the type's default
    collation: Option<String>,
}

impl Column {
    /// Create a new, non-inherited column
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        nullable: bool,
        default: Option<String>,
        ordinal: i32,
    ) -> Self {
        Column {
            name: name.into(),
            data_type: data_type.into(),
            nullable,
            default,
            ordinal,
            is_inherited: false,
            collation: None,
        }
    }

    /// Mark the column as inherited from a parent table
    pub fn inherited(mut self, is_inherited: bool) -> Self {
        self.is_inherited = is_inherited;
        self
    }

    pub fn with_collation(mut self, collation: Option<String>) -> Self {
        self.collation = collation;
        self
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the formatted type name
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Check if the column can contain NULL values
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Get the default expression (if any)
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// Check if the column is inherited from a parent table
    pub fn is_inherited(&self) -> bool {
        self.is_inherited
    }

    pub fn collation(&self) -> Option<&str> {
        self.collation.as_deref()
    }

    /// Same name and same type; nullability and defaults may differ
    pub(crate) fn same_shape(&self, other: &Column) -> bool {
        self.name == other.name && self.data_type == other.data_type
    }
}

/// Equality ignores `ordinal`: dropped columns leave gaps in the catalog
/// numbering, and position is already carried by the `ColumnMap` order.
impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.data_type == other.data_type
            && self.nullable == other.nullable
            && self.default == other.default
            && self.is_inherited == other.is_inherited
            && self.collation == other.collation
    }
}

impl Eq for Column {}

/// Build an ordered column map, keeping the given order
pub fn column_map(columns: impl IntoIterator<Item = Column>) -> ColumnMap {
    let mut map = ColumnMap::new();
    for column in columns {
        map.insert(column.name().to_string(), column);
    }
    map
}
