//! Network construction module

use anyhow::Result;
use crate::graph::SymmetricNetwork;
use crate::{NodeId, Weight};

/// Builder for incrementally constructing a SymmetricNetwork
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    /// Adjacency lists for each node, in insertion order
    adjacency_lists: Vec<Vec<(NodeId, Weight)>>,
}

impl NetworkBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new network builder with room for the given number of nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency_lists: Vec::with_capacity(capacity),
        }
    }

    fn ensure_node(&mut self, node: NodeId) {
        let needed = node as usize + 1;
        if self.adjacency_lists.len() < needed {
            self.adjacency_lists.resize_with(needed, Vec::new);
        }
    }

    /// Add an undirected link. Adding the same pair again overwrites its weight.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> &mut Self {
        if a == b {
            log::debug!("Ignoring self-loop on node {}", a);
            return self;
        }

        self.ensure_node(a.max(b));
        self.adjacency_lists[a as usize].push((b, weight));
        self.adjacency_lists[b as usize].push((a, weight));
        self
    }

    /// Build the compressed network
    pub fn build(mut self) -> Result<SymmetricNetwork> {
        let node_count = self.adjacency_lists.len();

        for list in &mut self.adjacency_lists {
            // Latest insertion wins for repeated pairs: reverse, then a stable
            // sort keeps it first among equal keys for dedup
            list.reverse();
            list.sort_by_key(|&(neighbour, _)| neighbour);
            list.dedup_by_key(|&mut (neighbour, _)| neighbour);
        }

        let link_slots: usize = self.adjacency_lists.iter()
            .map(|list| list.len())
            .sum();

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut neighbours = Vec::with_capacity(link_slots);
        let mut weights = Vec::with_capacity(link_slots);
        offsets.push(0);

        let mut offset = 0u32;
        for (node, list) in self.adjacency_lists.into_iter().enumerate() {
            for (neighbour, weight) in list {
                if !weight.is_finite() {
                    return Err(anyhow::anyhow!(
                        "Link {}-{} has non-finite weight {}", node, neighbour, weight
                    ));
                }
                neighbours.push(neighbour);
                weights.push(weight);
                offset += 1;
            }
            offsets.push(offset);
        }

        let network = SymmetricNetwork::from_parts(node_count, offsets, neighbours, weights)?;

        log::debug!(
            "Built network with {} nodes and {} links",
            network.node_count(),
            network.link_count()
        );

        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedNetwork;

    #[test]
    fn test_repeated_pair_overwrites() {
        let mut builder = NetworkBuilder::with_capacity(3);
        builder
            .add_edge(0, 1, 1.0)
            .add_edge(1, 0, 4.0)
            .add_edge(1, 2, 2.0);
        let network = builder.build().unwrap();

        assert_eq!(network.link_count(), 2);
        assert_eq!(network.link_weight(0, 1), Some(4.0));
        assert_eq!(network.link_weight(1, 0), Some(4.0));
    }

    #[test]
    fn test_self_loops_ignored() {
        let mut builder = NetworkBuilder::new();
        builder.add_edge(3, 3, 1.0);
        let network = builder.build().unwrap();

        assert_eq!(network.node_count(), 0);
        assert_eq!(network.link_weight(3, 3), None);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let mut builder = NetworkBuilder::new();
        builder.add_edge(0, 1, f32::NAN);
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_isolated_nodes_kept() {
        let mut builder = NetworkBuilder::new();
        builder.add_edge(5, 2, 1.0);
        let network = builder.build().unwrap();

        assert_eq!(network.node_count(), 6);
        assert_eq!(network.degree(0), 0);
        assert_eq!(network.degree(5), 1);
    }
}
