//! Cliques weighted by their induced links in a weighted network

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use crate::clique::{Clique, Edge, NodeSet, WeightStrategy, Weighted};
use crate::config::{Config, LinkWeightPolicy};
use crate::error::CliqueError;
use crate::graph::WeightedNetwork;
use crate::{NodeId, Weight};

/// A clique with a weight reduced from all of its pairwise link weights.
///
/// The weight is derived once, when the clique is built or its nodes are
/// replaced; no reference to the network is kept. Equality, ordering and
/// hashing only look at the nodes.
///
/// Deserialization re-derives the weight from the stored link weights and
/// rejects records whose weight does not follow from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WeightedCliqueRecord")]
pub struct WeightedClique {
    clique: Clique,
    weight: Weight,

    /// Link weights collected at the last derivation, in sorted pair order
    link_weights: Vec<Weight>,

    strategy: WeightStrategy,
    link_policy: LinkWeightPolicy,
}

/// Serialized form of a weighted clique, checked before use
#[derive(Deserialize)]
struct WeightedCliqueRecord {
    clique: Clique,
    weight: Weight,
    #[serde(default)]
    link_weights: Vec<Weight>,
    strategy: WeightStrategy,
    #[serde(default)]
    link_policy: LinkWeightPolicy,
}

impl TryFrom<WeightedCliqueRecord> for WeightedClique {
    type Error = CliqueError;

    fn try_from(record: WeightedCliqueRecord) -> Result<Self, CliqueError> {
        let size = record.clique.size();
        if let Some(&weight) = record.link_weights.iter().find(|w| !is_valid_weight(**w)) {
            return Err(CliqueError::InvalidWeight { weight });
        }
        let expected = expected_link_count(size);
        if record.link_weights.len() > expected {
            return Err(CliqueError::LinkCountMismatch {
                expected,
                found: record.link_weights.len(),
            });
        }

        let derived = record.strategy
            .reduce(&record.link_weights)
            .ok_or(CliqueError::NoLinkWeights { size })?;
        if !is_valid_weight(record.weight) {
            return Err(CliqueError::InvalidWeight { weight: record.weight });
        }
        if (derived - record.weight).abs() > WEIGHT_TOLERANCE * derived {
            return Err(CliqueError::WeightMismatch { stored: record.weight, derived });
        }

        Ok(Self {
            clique: record.clique,
            weight: derived,
            link_weights: record.link_weights,
            strategy: record.strategy,
            link_policy: record.link_policy,
        })
    }
}

/// Relative slack allowed between a stored weight and the one re-derived
const WEIGHT_TOLERANCE: Weight = 1e-5;

fn is_valid_weight(weight: Weight) -> bool {
    weight.is_finite() && weight > 0.0
}

impl WeightedClique {
    /// Build a clique from nodes in any order, weighting it from `network`.
    ///
    /// Missing or non-positive links are logged and left out of the weight.
    pub fn new<N>(
        nodes: Vec<NodeId>,
        network: &N,
        strategy: WeightStrategy,
    ) -> Result<Self, CliqueError>
    where
        N: WeightedNetwork + ?Sized,
    {
        Self::build(Clique::new(nodes), network, strategy, LinkWeightPolicy::Warn)
    }

    /// Build a clique using the strategy and link policy from `config`
    pub fn with_config<N>(
        nodes: Vec<NodeId>,
        network: &N,
        config: &Config,
    ) -> Result<Self, CliqueError>
    where
        N: WeightedNetwork + ?Sized,
    {
        Self::build(Clique::new(nodes), network, config.strategy, config.link_policy)
    }

    fn build<N>(
        clique: Clique,
        network: &N,
        strategy: WeightStrategy,
        link_policy: LinkWeightPolicy,
    ) -> Result<Self, CliqueError>
    where
        N: WeightedNetwork + ?Sized,
    {
        let (link_weights, weight) = derive_weight(&clique, network, strategy, link_policy)?;
        Ok(Self {
            clique,
            weight,
            link_weights,
            strategy,
            link_policy,
        })
    }

    /// Replace the nodes and re-derive the weight with the same strategy.
    ///
    /// On error the clique is left unchanged.
    pub fn replace_nodes<N>(&mut self, nodes: Vec<NodeId>, network: &N) -> Result<(), CliqueError>
    where
        N: WeightedNetwork + ?Sized,
    {
        let clique = Clique::new(nodes);
        let (link_weights, weight) =
            derive_weight(&clique, network, self.strategy, self.link_policy)?;

        self.clique = clique;
        self.link_weights = link_weights;
        self.weight = weight;
        Ok(())
    }

    /// Weight derived at construction or the last node replacement
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Reduction chosen at construction
    pub fn strategy(&self) -> WeightStrategy {
        self.strategy
    }

    /// Handling of invalid links used for every re-derivation
    pub fn link_policy(&self) -> LinkWeightPolicy {
        self.link_policy
    }

    /// Link weights behind the current weight
    pub fn link_weights(&self) -> &[Weight] {
        &self.link_weights
    }

    /// Number of links a clique of this size has
    pub fn expected_link_count(&self) -> usize {
        expected_link_count(self.clique.size())
    }

    /// The unweighted clique
    pub fn clique(&self) -> &Clique {
        &self.clique
    }

    /// Drop the weight, keeping the nodes
    pub fn into_clique(self) -> Clique {
        self.clique
    }

    /// Nodes in ascending order
    pub fn nodes(&self) -> &[NodeId] {
        self.clique.nodes()
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.clique.size()
    }

    /// Node at `index` in sorted order
    pub fn at(&self, index: usize) -> Result<NodeId, CliqueError> {
        self.clique.at(index)
    }

    /// See [`Clique::less_than`]
    pub fn less_than(&self, other: &WeightedClique) -> bool {
        self.clique.less_than(&other.clique)
    }
}

fn expected_link_count(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

/// Report a data problem according to the policy
fn check(policy: LinkWeightPolicy, err: CliqueError) -> Result<(), CliqueError> {
    match policy {
        LinkWeightPolicy::Warn => {
            log::warn!("{}", err);
            Ok(())
        }
        LinkWeightPolicy::Reject => Err(err),
    }
}

/// Collect every pairwise link weight of the clique, then reduce them.
///
/// A short link count is always a warning: the count can only come up short
/// after an invalid link, which `Reject` has already turned into an error.
fn derive_weight<N>(
    clique: &Clique,
    network: &N,
    strategy: WeightStrategy,
    policy: LinkWeightPolicy,
) -> Result<(Vec<Weight>, Weight), CliqueError>
where
    N: WeightedNetwork + ?Sized,
{
    let expected = expected_link_count(clique.size());
    let mut link_weights = Vec::with_capacity(expected);

    for (&a, &b) in clique.nodes().iter().tuple_combinations() {
        match network.link_weight(a, b) {
            Some(weight) if weight > 0.0 => link_weights.push(weight),
            weight => check(policy, CliqueError::InvalidLinkWeight { a, b, weight })?,
        }
    }

    if link_weights.len() != expected {
        log::warn!("{}", CliqueError::LinkCountMismatch {
            expected,
            found: link_weights.len(),
        });
    }

    let weight = strategy
        .reduce(&link_weights)
        .ok_or(CliqueError::NoLinkWeights { size: clique.size() })?;

    log::debug!("Clique {} has {} weight {}", clique, strategy, weight);

    Ok((link_weights, weight))
}

impl Default for WeightedClique {
    fn default() -> Self {
        Self {
            clique: Clique::default(),
            weight: 0.0,
            link_weights: Vec::new(),
            strategy: WeightStrategy::Minimum,
            link_policy: LinkWeightPolicy::Warn,
        }
    }
}

impl NodeSet for WeightedClique {
    fn clique(&self) -> &Clique {
        &self.clique
    }
}

impl Weighted for WeightedClique {
    fn weight(&self) -> Weight {
        self.weight
    }
}

impl From<Edge> for WeightedClique {
    fn from(edge: Edge) -> Self {
        let weight = edge.weight();
        if !is_valid_weight(weight) {
            log::warn!("Edge {}: {}", edge, CliqueError::InvalidWeight { weight });
        }
        Self {
            clique: edge.into_clique(),
            weight,
            link_weights: vec![weight],
            strategy: WeightStrategy::Minimum,
            link_policy: LinkWeightPolicy::Warn,
        }
    }
}

impl PartialEq for WeightedClique {
    fn eq(&self, other: &Self) -> bool {
        self.clique == other.clique
    }
}

impl Eq for WeightedClique {}

impl Hash for WeightedClique {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.clique.hash(state);
    }
}

impl Ord for WeightedClique {
    fn cmp(&self, other: &Self) -> Ordering {
        self.clique.cmp(&other.clique)
    }
}

impl PartialOrd for WeightedClique {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WeightedClique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} w={}", self.clique, self.weight)
    }
}
