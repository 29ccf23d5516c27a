//! Dependency Graph Module
//!
//! Directed graph over object identities: direct edges from catalog dependency
//! rows, closest-first transitive closures and a deterministic creation order.

pub mod dependency;
pub mod error;
pub mod order;

pub use self::dependency::{DependencyGraph, Direction, NodeId};
pub use self::error::{GraphError, GraphResult};
