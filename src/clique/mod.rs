//! Canonical clique value types

pub mod strategy;
pub mod weighted;
pub mod edge;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use crate::error::CliqueError;
use crate::{NodeId, Weight};

pub use edge::Edge;
pub use strategy::WeightStrategy;
pub use weighted::WeightedClique;

/// Read access shared by every clique type
pub trait NodeSet {
    /// The underlying canonical clique
    fn clique(&self) -> &Clique;

    /// Nodes in ascending order
    fn nodes(&self) -> &[NodeId] {
        self.clique().nodes()
    }

    /// Number of nodes
    fn size(&self) -> usize {
        self.clique().size()
    }

    /// Node at `index` in sorted order
    fn at(&self, index: usize) -> Result<NodeId, CliqueError> {
        self.clique().at(index)
    }
}

/// Clique types carrying a single scalar weight
pub trait Weighted {
    /// The scalar weight of the clique
    fn weight(&self) -> Weight;
}

/// A fixed-size set of nodes, stored sorted.
///
/// Sorting on construction makes equality, ordering and hashing independent
/// of the order the nodes were discovered in. Duplicate ids are kept as given.
///
/// `Ord` orders by size first and then lexicographically, so cliques of mixed
/// sizes can share an ordered container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<NodeId>", into = "Vec<NodeId>")]
pub struct Clique {
    nodes: Vec<NodeId>,
}

impl Clique {
    /// Create a clique from nodes in any order
    pub fn new(nodes: Vec<NodeId>) -> Self {
        let mut clique = Self { nodes: Vec::new() };
        clique.replace_nodes(nodes);
        clique
    }

    /// Replace all nodes, restoring sorted order
    pub fn replace_nodes(&mut self, nodes: Vec<NodeId>) {
        self.nodes = nodes;
        self.nodes.sort_unstable();
    }

    /// Nodes in ascending order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes, duplicates included
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index` in sorted order
    pub fn at(&self, index: usize) -> Result<NodeId, CliqueError> {
        self.nodes.get(index).copied().ok_or(CliqueError::IndexOutOfRange {
            index,
            size: self.nodes.len(),
        })
    }

    /// Iterate over nodes in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    /// Check membership with a binary search
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }

    /// Size of the multiset intersection of the two node lists.
    /// For duplicate-free cliques this is the number of shared nodes.
    pub fn shared_nodes(&self, other: &Clique) -> usize {
        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < self.nodes.len() && j < other.nodes.len() {
            match self.nodes[i].cmp(&other.nodes[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }

    /// Lexicographic comparison of two cliques of the same size
    pub fn try_cmp(&self, other: &Clique) -> Result<Ordering, CliqueError> {
        if self.size() != other.size() {
            return Err(CliqueError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(self.nodes.cmp(&other.nodes))
    }

    /// Strict less-than among cliques of equal size.
    ///
    /// Cliques of different sizes are not ordered by this comparison: the
    /// mismatch is logged and the result is `false`. Use `Ord` for a total
    /// order over mixed sizes.
    pub fn less_than(&self, other: &Clique) -> bool {
        match self.try_cmp(other) {
            Ok(ordering) => ordering == Ordering::Less,
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        }
    }
}

impl NodeSet for Clique {
    fn clique(&self) -> &Clique {
        self
    }
}

impl PartialEq for Clique {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.nodes.iter().zip(&other.nodes).all(|(a, b)| a == b)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.size() != other.size()
            || self.nodes.iter().zip(&other.nodes).any(|(a, b)| a != b)
    }
}

impl Eq for Clique {}

impl Hash for Clique {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.hash(state);
    }
}

impl Ord for Clique {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size()
            .cmp(&other.size())
            .then_with(|| self.nodes.cmp(&other.nodes))
    }
}

impl PartialOrd for Clique {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Vec<NodeId>> for Clique {
    fn from(nodes: Vec<NodeId>) -> Self {
        Clique::new(nodes)
    }
}

impl From<Clique> for Vec<NodeId> {
    fn from(clique: Clique) -> Self {
        clique.nodes
    }
}

impl FromIterator<NodeId> for Clique {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Clique::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Clique {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.nodes.iter().join(", "))
    }
}
