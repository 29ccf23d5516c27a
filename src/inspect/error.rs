use thiserror::Error;
use crate::common::types::Identity;
use crate::graph::GraphError;

/// Errors raised while building a snapshot
#[derive(Error, Debug)]
pub enum InspectError {
    /// Failure inside the catalog-extraction collaborator, passed through as is
    #[error(transparent)]
    Extraction(#[from] anyhow::Error),
    #[error("Duplicate object identity {0}")]
    DuplicateIdentity(Identity),
    #[error("Dependency {dependent} -> {dependency} references an object missing from the snapshot")]
    DanglingDependency {
        dependent: Identity,
        dependency: Identity,
    },
    #[error("Comment references unknown object {0}")]
    UnknownCommentOwner(Identity),
    #[error("Table {table} inherits from unknown table {parent}")]
    UnknownParentTable {
        table: Identity,
        parent: Identity,
    },
    #[error("Dependency cycle detected: {}", cycle.join(" -> "))]
    DependencyCycle {
        cycle: Vec<Identity>,
    },
    #[error("Dependency graph error: {0}")]
    Graph(GraphError),
}

impl From<GraphError> for InspectError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::DuplicateNode(identity) => InspectError::DuplicateIdentity(identity),
            GraphError::DanglingEdge { dependent, dependency } => {
                InspectError::DanglingDependency { dependent, dependency }
            }
            GraphError::CycleDetected { cycle } => InspectError::DependencyCycle { cycle },
            other => InspectError::Graph(other),
        }
    }
}

/// Result type for snapshot construction
pub type InspectResult<T> = Result<T, InspectError>;
