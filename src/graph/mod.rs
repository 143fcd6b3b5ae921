//! Read-only weighted network access used by weighted cliques

pub mod compressed;
pub mod builder;

use petgraph::graph::{NodeIndex, UnGraph};
use crate::{NodeId, Weight};

pub use builder::NetworkBuilder;
pub use compressed::SymmetricNetwork;

/// A symmetric weighted network that can be queried for link weights.
///
/// Cliques only ever read from the network while they are being built, so any
/// implementation that is `Sync` can be shared between threads building
/// cliques in parallel.
pub trait WeightedNetwork {
    /// Weight of the link between `a` and `b`, or `None` if there is no link.
    ///
    /// Must be symmetric: `link_weight(a, b) == link_weight(b, a)`.
    fn link_weight(&self, a: NodeId, b: NodeId) -> Option<Weight>;
}

impl<T: WeightedNetwork + ?Sized> WeightedNetwork for &T {
    fn link_weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        (**self).link_weight(a, b)
    }
}

/// Node ids are petgraph node indices
impl<N> WeightedNetwork for UnGraph<N, Weight> {
    fn link_weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.find_edge(NodeIndex::new(a as usize), NodeIndex::new(b as usize))
            .and_then(|edge| self.edge_weight(edge))
            .copied()
    }
}
