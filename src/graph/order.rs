// Topological Ordering
//
// Produces a total creation order over a dependency graph: every object comes
// after everything it depends on. Ties are broken by discovery rank.

use crate::common::types::Identity;
use super::dependency::{DependencyGraph, NodeId};
use super::error::{GraphError, GraphResult};

impl DependencyGraph {
    /// Discovery rank of every node.
    ///
    /// Nodes are walked in insertion order; a node is ranked when first reached,
    /// and its direct dependencies are ranked right after it. A dependency that is
    /// declared late but referenced early therefore ranks early.
    pub fn discovery_ranks(&self) -> Vec<usize> {
        let mut ranks: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut next_rank = 0;

        for (id, node) in self.nodes.iter().enumerate() {
            for candidate in std::iter::once(id).chain(node.dependent_on.iter().copied()) {
                if ranks[candidate].is_none() {
                    ranks[candidate] = Some(next_rank);
                    next_rank += 1;
                }
            }
        }

        ranks.into_iter().map(|rank| rank.unwrap_or(usize::MAX)).collect()
    }

    /// Total order of every node in which dependencies precede their dependents.
    ///
    /// Nodes are released in generations: each generation holds the nodes whose
    /// dependencies were all emitted in earlier generations, sorted by discovery
    /// rank. The output is identical across calls on the same graph.
    pub fn topological_order(&self) -> GraphResult<Vec<Identity>> {
        let ranks = self.discovery_ranks();
        let mut remaining: Vec<usize> = self.nodes.iter().map(|node| node.dependent_on.len()).collect();
        let mut ready: Vec<NodeId> = (0..self.nodes.len()).filter(|&id| remaining[id] == 0).collect();
        let mut order: Vec<NodeId> = Vec::with_capacity(self.nodes.len());

        while !ready.is_empty() {
            ready.sort_by_key(|&id| ranks[id]);
            let mut next = Vec::new();

            for &id in &ready {
                order.push(id);
                for &dependent in &self.nodes[id].dependents {
                    remaining[dependent] -= 1;
                    if remaining[dependent] == 0 {
                        next.push(dependent);
                    }
                }
            }

            ready = next;
        }

        if order.len() != self.nodes.len() {
            let mut stuck: Vec<NodeId> = (0..self.nodes.len()).filter(|&id| remaining[id] > 0).collect();
            stuck.sort_by_key(|&id| ranks[id]);
            return Err(GraphError::CycleDetected {
                cycle: self.identities_of(&stuck),
            });
        }

        Ok(self.identities_of(&order))
    }
}
