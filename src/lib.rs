// Schema Graph
//
// In-memory, versioned model of a database catalog: schema objects, their
// dependency graph, a safe creation order, and the rules that decide whether a
// changed definition can be replaced in place.

pub mod catalog;
pub mod common;
pub mod graph;
pub mod inspect;

// Re-export key items for convenient access
pub use catalog::{Column, ColumnMap, CompatibilityError, ObjectDefinition, SchemaObject};
pub use common::types::{Identity, ObjectKind, QualifiedName};
pub use graph::{DependencyGraph, GraphError};
pub use inspect::{get_inspector, CatalogRows, CatalogSource, InspectError, InspectOptions, Inspector};
