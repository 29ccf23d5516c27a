//! Catalog Rows
//!
//! Raw rows handed over by the catalog-extraction collaborator. They mirror what
//! the catalog queries return and carry no graph information beyond the explicit
//! dependency rows.

use serde::{Serialize, Deserialize};
use crate::catalog::column::Column;
use crate::catalog::function::{FunctionArgument, RoutineKind};
use crate::common::types::{Identity, QualifiedName};

/// Everything one inspection call needs, fetched from a single catalog snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogRows {
    /// Engine major version, passed through to callers
    pub pg_version: u32,
    #[serde(default)]
    pub relations: Vec<RelationRow>,
    #[serde(default)]
    pub functions: Vec<FunctionRow>,
    #[serde(default)]
    pub enums: Vec<EnumRow>,
    #[serde(default)]
    pub sequences: Vec<SequenceRow>,
    #[serde(default)]
    pub dependencies: Vec<DependencyRow>,
    #[serde(default)]
    pub comments: Vec<CommentRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Table,
    View,
}

/// A table or view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationRow {
    pub schema: String,
    pub name: String,
    pub kind: RelationKind,
    /// View query text
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnRow>,
    /// Tables this table inherits from, in declaration order
    #[serde(default)]
    pub parent_tables: Vec<QualifiedName>,
    #[serde(default)]
    pub is_unlogged: bool,
}

impl RelationRow {
    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.schema.clone(), self.name.clone())
    }
}

/// A column or function result attribute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRow {
    pub name: String,
    pub data_type: String,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub default: Option<String>,
    pub ordinal: i32,
    #[serde(default)]
    pub is_inherited: bool,
    #[serde(default)]
    pub collation: Option<String>,
}

impl ColumnRow {
    pub fn to_column(&self) -> Column {
        Column::new(
            self.name.clone(),
            self.data_type.clone(),
            !self.not_null,
            self.default.clone(),
            self.ordinal,
        )
        .inherited(self.is_inherited)
        .with_collation(self.collation.clone())
    }
}

/// A function or procedure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRow {
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub kind: RoutineKind,
    #[serde(default)]
    pub arguments: Vec<FunctionArgument>,
    pub return_type: String,
    #[serde(default)]
    pub returns_set: bool,
    /// Row shape the routine produces, in output order
    #[serde(default)]
    pub result_columns: Vec<ColumnRow>,
    pub language: String,
    pub definition: String,
    #[serde(default = "default_volatility")]
    pub volatility: String,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub security_definer: bool,
}

fn default_volatility() -> String {
    "v".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumRow {
    pub schema: String,
    pub name: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRow {
    pub schema: String,
    pub name: String,
    pub data_type: String,
    pub start: i64,
    pub increment: i64,
    pub min_value: i64,
    pub max_value: i64,
    #[serde(default = "default_cache")]
    pub cache: i64,
    #[serde(default)]
    pub cycle: bool,
    #[serde(default)]
    pub owned_by: Option<String>,
}

fn default_cache() -> i64 {
    1
}

/// `dependent` depends on `dependency`, as recorded by the catalog's native
/// dependency tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRow {
    pub dependent: Identity,
    pub dependency: Identity,
}

impl DependencyRow {
    pub fn new(dependent: impl Into<Identity>, dependency: impl Into<Identity>) -> Self {
        DependencyRow {
            dependent: dependent.into(),
            dependency: dependency.into(),
        }
    }
}

/// A comment attached to the object with identity `owner`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRow {
    pub owner: Identity,
    pub text: String,
}
