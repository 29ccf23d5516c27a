//! Dependency Graph Module
//!
//! Arena of object identities connected by direct dependency edges. Edges are
//! kept in discovery order, and transitive closures are computed closest-first.

use std::collections::{HashMap, HashSet};
use linked_hash_map::LinkedHashMap;
use log::trace;
use crate::common::types::Identity;
use super::error::{GraphError, GraphResult};

/// Index of a node inside the graph arena
pub type NodeId = usize;

/// Which side of an edge a traversal follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From an object to the objects it depends on
    DependentOn,
    /// From an object to the objects that depend on it
    Dependents,
}

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) identity: Identity,
    pub(super) dependent_on: Vec<NodeId>,
    pub(super) dependents: Vec<NodeId>,
}

/// Directed graph keyed by object identity
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub(super) nodes: Vec<Node>,
    index: HashMap<Identity, NodeId>,
}

impl DependencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a node with this identity exists
    pub fn contains(&self, identity: &str) -> bool {
        self.index.contains_key(identity)
    }

    /// Node identities in insertion order
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.identity.as_str())
    }

    /// Add a node. Identities are unique across the whole graph.
    pub fn add_node(&mut self, identity: impl Into<Identity>) -> GraphResult<NodeId> {
        let identity = identity.into();
        if self.index.contains_key(&identity) {
            return Err(GraphError::DuplicateNode(identity));
        }
        let id = self.nodes.len();
        self.index.insert(identity.clone(), id);
        self.nodes.push(Node {
            identity,
            dependent_on: Vec::new(),
            dependents: Vec::new(),
        });
        Ok(id)
    }

    /// Look up the arena index of a node
    pub fn node_id(&self, identity: &str) -> GraphResult<NodeId> {
        self.index
            .get(identity)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(identity.to_string()))
    }

    /// Record that `dependent` depends on `dependency`.
    ///
    /// Returns `false` when the edge was already present (it is not appended
    /// twice) or when both ends are the same object.
    pub fn add_edge(&mut self, dependent: &str, dependency: &str) -> GraphResult<bool> {
        let (Some(&from), Some(&to)) = (self.index.get(dependent), self.index.get(dependency)) else {
            return Err(GraphError::DanglingEdge {
                dependent: dependent.to_string(),
                dependency: dependency.to_string(),
            });
        };

        // The catalog reports a view's rewrite rule as depending on the view itself
        if from == to || self.nodes[from].dependent_on.contains(&to) {
            return Ok(false);
        }

        trace!("edge {} -> {}", dependent, dependency);
        self.nodes[from].dependent_on.push(to);
        self.nodes[to].dependents.push(from);
        Ok(true)
    }

    /// Direct dependencies of a node, in discovery order
    pub fn dependent_on(&self, identity: &str) -> GraphResult<Vec<Identity>> {
        self.direct(identity, Direction::DependentOn)
    }

    /// Direct dependents of a node, in discovery order
    pub fn dependents(&self, identity: &str) -> GraphResult<Vec<Identity>> {
        self.direct(identity, Direction::Dependents)
    }

    /// Direct neighbours of a node in the given direction
    pub fn direct(&self, identity: &str, direction: Direction) -> GraphResult<Vec<Identity>> {
        let id = self.node_id(identity)?;
        Ok(self.identities_of(self.edges(id, direction)))
    }

    /// Transitive dependencies of a single node, closest first
    pub fn dependent_on_all(&self, identity: &str) -> GraphResult<Vec<Identity>> {
        self.closure(identity, Direction::DependentOn)
    }

    /// Transitive dependents of a single node, closest first
    pub fn dependents_all(&self, identity: &str) -> GraphResult<Vec<Identity>> {
        self.closure(identity, Direction::Dependents)
    }

    /// Transitive closure of a single node in the given direction
    pub fn closure(&self, identity: &str, direction: Direction) -> GraphResult<Vec<Identity>> {
        let id = self.node_id(identity)?;
        let memo = self.compute_closures(&[id], direction)?;
        Ok(memo[id]
            .as_deref()
            .map(|ids| self.identities_of(ids))
            .unwrap_or_default())
    }

    /// Transitive closures of every node, keyed by identity in insertion order
    pub fn closures(&self, direction: Direction) -> GraphResult<LinkedHashMap<Identity, Vec<Identity>>> {
        let roots: Vec<NodeId> = (0..self.nodes.len()).collect();
        let memo = self.compute_closures(&roots, direction)?;

        let mut result = LinkedHashMap::new();
        for (node, closure) in self.nodes.iter().zip(memo) {
            let ids = closure.unwrap_or_default();
            result.insert(node.identity.clone(), self.identities_of(&ids));
        }
        Ok(result)
    }

    pub(super) fn edges(&self, id: NodeId, direction: Direction) -> &[NodeId] {
        match direction {
            Direction::DependentOn => &self.nodes[id].dependent_on,
            Direction::Dependents => &self.nodes[id].dependents,
        }
    }

    pub(super) fn identities_of(&self, ids: &[NodeId]) -> Vec<Identity> {
        ids.iter().map(|&id| self.nodes[id].identity.clone()).collect()
    }

    /// Depth-first closure computation with memoisation.
    ///
    /// The closure of a node is its direct edges followed by the closure of each
    /// direct edge in order, keeping only the first occurrence of every node.
    /// Nodes currently on the traversal stack are tracked so that a cycle is
    /// reported instead of being followed.
    fn compute_closures(&self, roots: &[NodeId], direction: Direction) -> GraphResult<Vec<Option<Vec<NodeId>>>> {
        let mut memo: Vec<Option<Vec<NodeId>>> = vec![None; self.nodes.len()];
        let mut on_stack = vec![false; self.nodes.len()];

        for &root in roots {
            if memo[root].is_some() {
                continue;
            }

            let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
            on_stack[root] = true;

            while let Some(top) = stack.last_mut() {
                let node = top.0;
                let edges = self.edges(node, direction);

                if let Some(&next) = edges.get(top.1) {
                    top.1 += 1;
                    if memo[next].is_some() {
                        continue;
                    }
                    if on_stack[next] {
                        return Err(self.cycle_error(&stack, next));
                    }
                    on_stack[next] = true;
                    stack.push((next, 0));
                    continue;
                }

                let mut seen = HashSet::new();
                let mut all = Vec::new();
                for &direct in edges {
                    if seen.insert(direct) {
                        all.push(direct);
                    }
                }
                for &direct in edges {
                    if let Some(further) = &memo[direct] {
                        for &id in further {
                            if seen.insert(id) {
                                all.push(id);
                            }
                        }
                    }
                }

                memo[node] = Some(all);
                on_stack[node] = false;
                stack.pop();
            }
        }

        Ok(memo)
    }

    fn cycle_error(&self, stack: &[(NodeId, usize)], repeated: NodeId) -> GraphError {
        let start = stack.iter().position(|&(id, _)| id == repeated).unwrap_or(0);
        let mut cycle: Vec<Identity> = stack[start..]
            .iter()
            .map(|&(id, _)| self.nodes[id].identity.clone())
            .collect();
        cycle.push(self.nodes[repeated].identity.clone());
        GraphError::CycleDetected { cycle }
    }
}
