//! Single weighted links handled as two-node cliques

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};
use crate::clique::{Clique, NodeSet, Weighted};
use crate::error::CliqueError;
use crate::{NodeId, Weight};

/// A link between two nodes with a directly supplied weight.
///
/// Endpoints are stored sorted, so `Edge::new(7, 3, w)` and `Edge::new(3, 7, w)`
/// are the same edge. Serialized as `[start, end, weight]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "(NodeId, NodeId, Weight)", into = "(NodeId, NodeId, Weight)")]
pub struct Edge {
    clique: Clique,
    weight: Weight,
}

impl Edge {
    /// Create an edge between two nodes in either order
    pub fn new(start: NodeId, end: NodeId, weight: Weight) -> Self {
        Self {
            clique: Clique::new(vec![start, end]),
            weight,
        }
    }

    /// Edge with the default weight of 1
    pub fn unweighted(start: NodeId, end: NodeId) -> Self {
        Self::new(start, end, 1.0)
    }

    /// The weight given at construction
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Lower endpoint
    pub fn start(&self) -> NodeId {
        self.clique.nodes()[0]
    }

    /// Higher endpoint
    pub fn end(&self) -> NodeId {
        self.clique.nodes()[1]
    }

    /// The two endpoints as a clique
    pub fn clique(&self) -> &Clique {
        &self.clique
    }

    /// Drop the weight, keeping the endpoints
    pub fn into_clique(self) -> Clique {
        self.clique
    }

    /// Both endpoints in ascending order
    pub fn nodes(&self) -> &[NodeId] {
        self.clique.nodes()
    }

    /// Always 2
    pub fn size(&self) -> usize {
        self.clique.size()
    }

    /// Endpoint at `index`, 0 or 1
    pub fn at(&self, index: usize) -> Result<NodeId, CliqueError> {
        self.clique.at(index)
    }
}

impl Default for Edge {
    fn default() -> Self {
        Self::unweighted(0, 1)
    }
}

impl NodeSet for Edge {
    fn clique(&self) -> &Clique {
        &self.clique
    }
}

impl Weighted for Edge {
    fn weight(&self) -> Weight {
        self.weight
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((start, end, weight): (NodeId, NodeId, Weight)) -> Self {
        Edge::new(start, end, weight)
    }
}

impl From<Edge> for (NodeId, NodeId, Weight) {
    fn from(edge: Edge) -> Self {
        (edge.start(), edge.end(), edge.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.clique == other.clique
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.clique.hash(state);
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.clique.cmp(&other.clique)
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} w={}", self.clique, self.weight)
    }
}
