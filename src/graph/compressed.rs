//! Memory-efficient symmetric weighted network

use anyhow::Result;
use serde::{Serialize, Deserialize};
use crate::graph::WeightedNetwork;
use crate::{NodeId, Weight};

/// Compressed sparse representation of an undirected weighted network.
///
/// Every link is stored in both endpoints' adjacency lists, which are kept
/// sorted so that a link lookup is a binary search. The arrays are checked
/// on construction and on deserialization, so lookups never index out of
/// bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NetworkParts", into = "NetworkParts")]
pub struct SymmetricNetwork {
    node_count: usize,

    /// offsets[i] to offsets[i+1] is the neighbour range of node i
    offsets: Vec<u32>,

    /// Concatenated sorted neighbour lists
    neighbours: Vec<NodeId>,

    /// Link weights, parallel to `neighbours`
    weights: Vec<Weight>,
}

/// Serialized form of a network, validated before use
#[derive(Serialize, Deserialize)]
struct NetworkParts {
    node_count: usize,
    offsets: Vec<u32>,
    neighbours: Vec<NodeId>,
    weights: Vec<Weight>,
}

impl TryFrom<NetworkParts> for SymmetricNetwork {
    type Error = anyhow::Error;

    fn try_from(parts: NetworkParts) -> Result<Self> {
        SymmetricNetwork::from_parts(parts.node_count, parts.offsets, parts.neighbours, parts.weights)
    }
}

impl From<SymmetricNetwork> for NetworkParts {
    fn from(network: SymmetricNetwork) -> Self {
        Self {
            node_count: network.node_count,
            offsets: network.offsets,
            neighbours: network.neighbours,
            weights: network.weights,
        }
    }
}

impl Default for SymmetricNetwork {
    fn default() -> Self {
        Self {
            node_count: 0,
            offsets: vec![0],
            neighbours: Vec::new(),
            weights: Vec::new(),
        }
    }
}

impl SymmetricNetwork {
    /// Assemble a network from CSR arrays, checking that they are consistent
    pub fn from_parts(
        node_count: usize,
        offsets: Vec<u32>,
        neighbours: Vec<NodeId>,
        weights: Vec<Weight>,
    ) -> Result<Self> {
        if offsets.len() != node_count + 1 {
            return Err(anyhow::anyhow!(
                "Expected {} offsets for {} nodes, found {}",
                node_count + 1, node_count, offsets.len()
            ));
        }
        if offsets[0] != 0 {
            return Err(anyhow::anyhow!("First offset must be 0, found {}", offsets[0]));
        }
        if offsets.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(anyhow::anyhow!("Offsets must not decrease"));
        }
        if offsets[node_count] as usize != neighbours.len() {
            return Err(anyhow::anyhow!(
                "Last offset {} does not match {} neighbours",
                offsets[node_count], neighbours.len()
            ));
        }
        if neighbours.len() != weights.len() {
            return Err(anyhow::anyhow!(
                "{} neighbours but {} weights", neighbours.len(), weights.len()
            ));
        }
        if let Some(&node) = neighbours.iter().find(|&&n| n as usize >= node_count) {
            return Err(anyhow::anyhow!("Neighbour {} is not a node of the network", node));
        }
        if let Some(weight) = weights.iter().find(|w| !w.is_finite()) {
            return Err(anyhow::anyhow!("Non-finite link weight {}", weight));
        }

        let network = Self { node_count, offsets, neighbours, weights };

        // Lookups binary search each adjacency list
        for node in 0..node_count {
            let list = &network.neighbours[network.range(node)];
            if list.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(anyhow::anyhow!("Neighbours of node {} are not strictly sorted", node));
            }
        }

        Ok(network)
    }

    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize..self.offsets[node + 1] as usize
    }

    /// Number of nodes, including isolated ones
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Sorted neighbours of a node
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        let node = node as usize;
        if node >= self.node_count {
            return &[];
        }
        &self.neighbours[self.range(node)]
    }

    /// Number of links at a node
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbours(node).len()
    }

    /// Number of undirected links
    pub fn link_count(&self) -> usize {
        self.neighbours.len() / 2
    }

    /// Check if there's a link between a and b
    pub fn has_link(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbours(a).binary_search(&b).is_ok()
    }
}

impl WeightedNetwork for SymmetricNetwork {
    fn link_weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        let node = a as usize;
        if node >= self.node_count {
            return None;
        }
        let range = self.range(node);
        let start = range.start;
        self.neighbours[range]
            .binary_search(&b)
            .ok()
            .map(|pos| self.weights[start + pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NetworkBuilder;

    fn path_network() -> SymmetricNetwork {
        let mut builder = NetworkBuilder::new();
        builder.add_edge(0, 1, 1.0);
        builder.add_edge(2, 1, 3.0);
        builder.add_edge(2, 3, 0.25);
        builder.build().unwrap()
    }

    #[test]
    fn test_symmetric_lookup() {
        let network = path_network();
        assert_eq!(network.node_count(), 4);
        assert_eq!(network.link_count(), 3);
        assert_eq!(network.link_weight(1, 2), Some(3.0));
        assert_eq!(network.link_weight(2, 1), Some(3.0));
        assert_eq!(network.link_weight(3, 2), Some(0.25));
        assert_eq!(network.link_weight(0, 3), None);
    }

    #[test]
    fn test_out_of_range_nodes() {
        let network = path_network();
        assert_eq!(network.link_weight(10, 0), None);
        assert_eq!(network.link_weight(0, 10), None);
        assert!(network.neighbours(10).is_empty());
        assert_eq!(network.degree(10), 0);
    }

    #[test]
    fn test_neighbours_sorted() {
        let network = path_network();
        assert_eq!(network.neighbours(1), &[0, 2]);
        assert_eq!(network.neighbours(2), &[1, 3]);
        assert!(network.has_link(3, 2));
        assert!(!network.has_link(3, 1));
    }

    #[test]
    fn test_serde_keeps_lookups() {
        let network = path_network();
        let json = serde_json::to_string(&network).unwrap();
        let restored: SymmetricNetwork = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.link_weight(2, 1), Some(3.0));
        assert_eq!(restored.node_count(), 4);

        let empty: SymmetricNetwork =
            serde_json::from_str(&serde_json::to_string(&SymmetricNetwork::default()).unwrap()).unwrap();
        assert_eq!(empty.link_weight(0, 1), None);
    }

    #[test]
    fn test_malformed_arrays_rejected() {
        let malformed = [
            // Too few offsets for the node count
            r#"{"node_count":3,"offsets":[0],"neighbours":[],"weights":[]}"#,
            // Decreasing offsets
            r#"{"node_count":2,"offsets":[0,2,1],"neighbours":[1],"weights":[1.0]}"#,
            // Last offset past the neighbour array
            r#"{"node_count":2,"offsets":[0,1,3],"neighbours":[1,0],"weights":[1.0,1.0]}"#,
            // Missing weight
            r#"{"node_count":2,"offsets":[0,1,2],"neighbours":[1,0],"weights":[1.0]}"#,
            // Neighbour outside the network
            r#"{"node_count":2,"offsets":[0,1,2],"neighbours":[5,0],"weights":[1.0,1.0]}"#,
            // Unsorted adjacency list
            r#"{"node_count":3,"offsets":[0,2,3,4],"neighbours":[2,1,0,0],"weights":[1.0,1.0,1.0,1.0]}"#,
        ];
        for json in malformed {
            assert!(serde_json::from_str::<SymmetricNetwork>(json).is_err(), "accepted {}", json);
        }
    }

    #[test]
    fn test_from_parts() {
        let network = SymmetricNetwork::from_parts(2, vec![0, 1, 2], vec![1, 0], vec![2.0, 2.0]).unwrap();
        assert_eq!(network.link_weight(0, 1), Some(2.0));

        assert!(SymmetricNetwork::from_parts(3, vec![0], vec![], vec![]).is_err());
        assert!(SymmetricNetwork::from_parts(1, vec![1, 1], vec![], vec![]).is_err());
        assert!(SymmetricNetwork::from_parts(2, vec![0, 1, 2], vec![1, 0], vec![f32::NAN, 1.0]).is_err());
    }
}
