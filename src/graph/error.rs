use thiserror::Error;
use crate::common::types::Identity;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} is already present in the dependency graph")]
    DuplicateNode(Identity),
    #[error("Node {0} not found in dependency graph")]
    UnknownNode(Identity),
    #[error("Edge {dependent} -> {dependency} references an object missing from the snapshot")]
    DanglingEdge {
        dependent: Identity,
        dependency: Identity,
    },
    #[error("Dependency cycle detected: {}", cycle.join(" -> "))]
    CycleDetected {
        cycle: Vec<Identity>,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
