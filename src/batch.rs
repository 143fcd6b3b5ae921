//! Bulk construction and ordering of weighted cliques

use std::cmp::Ordering;
use std::collections::BTreeSet;
use rayon::prelude::*;
use crate::clique::{Weighted, WeightedClique};
use crate::config::Config;
use crate::graph::WeightedNetwork;
use crate::NodeId;

/// Weight many cliques against one shared network in parallel.
///
/// Node lists shorter than `config.min_clique_size` are skipped, and cliques
/// that fail to build are logged and dropped. Input order is preserved.
pub fn weigh_cliques<N>(
    node_lists: Vec<Vec<NodeId>>,
    network: &N,
    config: &Config,
) -> Vec<WeightedClique>
where
    N: WeightedNetwork + Sync + ?Sized,
{
    let total = node_lists.len();

    let cliques: Vec<WeightedClique> = node_lists.into_par_iter()
        .filter(|nodes| nodes.len() >= config.min_clique_size)
        .filter_map(|nodes| match WeightedClique::with_config(nodes, network, config) {
            Ok(clique) => Some(clique),
            Err(err) => {
                log::warn!("Dropping clique: {}", err);
                None
            }
        })
        .collect();

    log::info!(
        "Weighted {} of {} cliques using {} strategy",
        cliques.len(),
        total,
        config.strategy
    );

    cliques
}

/// Collapse cliques found more than once into their canonical ordered set
pub fn dedup<C, I>(cliques: I) -> BTreeSet<C>
where
    C: Ord,
    I: IntoIterator<Item = C>,
{
    cliques.into_iter().collect()
}

/// Sort heaviest first. Equal weights fall back to the canonical clique order
/// so the result does not depend on input order.
pub fn sort_by_weight_desc<C>(cliques: &mut [C])
where
    C: Weighted + Ord,
{
    cliques.sort_by(compare_weight_desc);
}

fn compare_weight_desc<C: Weighted + Ord>(a: &C, b: &C) -> Ordering {
    b.weight()
        .total_cmp(&a.weight())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clique::{Edge, WeightStrategy};
    use crate::config::LinkWeightPolicy;
    use crate::graph::{NetworkBuilder, SymmetricNetwork};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Two triangles sharing the link 2-3
    fn bowtie_network() -> SymmetricNetwork {
        let mut builder = NetworkBuilder::new();
        builder
            .add_edge(1, 2, 1.0)
            .add_edge(1, 3, 2.0)
            .add_edge(2, 3, 3.0)
            .add_edge(2, 4, 4.0)
            .add_edge(3, 4, 5.0);
        builder.build().unwrap()
    }

    #[test]
    fn test_weigh_cliques_preserves_order() {
        init_logger();
        let network = bowtie_network();
        let config = Config::new(WeightStrategy::Maximum, LinkWeightPolicy::Warn, 3);

        let cliques = weigh_cliques(
            vec![vec![4, 3, 2], vec![1, 2], vec![3, 2, 1], vec![7, 8, 9]],
            &network,
            &config,
        );

        // [1, 2] is too small and {7, 8, 9} has no links
        assert_eq!(cliques.len(), 2);
        assert_eq!(cliques[0].nodes(), &[2, 3, 4]);
        assert_eq!(cliques[0].weight(), 5.0);
        assert_eq!(cliques[1].nodes(), &[1, 2, 3]);
        assert_eq!(cliques[1].weight(), 3.0);
    }

    #[test]
    fn test_weigh_cliques_reject_drops_partial() {
        init_logger();
        let network = bowtie_network();
        let config = Config::new(WeightStrategy::Minimum, LinkWeightPolicy::Reject, 2);

        // 1-4 is not a link
        let cliques = weigh_cliques(vec![vec![1, 2, 4], vec![2, 4]], &network, &config);
        assert_eq!(cliques.len(), 1);
        assert_eq!(cliques[0].weight(), 4.0);
    }

    #[test]
    fn test_dedup_permuted_cliques() {
        let network = bowtie_network();
        let config = Config::default();
        let cliques = weigh_cliques(
            vec![vec![1, 2, 3], vec![3, 1, 2], vec![2, 3, 4], vec![4, 2, 3], vec![2, 3]],
            &network,
            &config,
        );

        let unique = dedup(cliques);
        let nodes: Vec<&[NodeId]> = unique.iter().map(|c| c.nodes()).collect();
        assert_eq!(nodes, vec![&[2, 3][..], &[1, 2, 3][..], &[2, 3, 4][..]]);
    }

    #[test]
    fn test_sort_by_weight_desc_ties() {
        let mut edges = vec![
            Edge::new(5, 6, 1.0),
            Edge::new(1, 2, 3.0),
            Edge::new(3, 4, 1.0),
            Edge::new(0, 9, 2.0),
        ];
        sort_by_weight_desc(&mut edges);

        let order: Vec<(NodeId, NodeId)> = edges.iter().map(|e| (e.start(), e.end())).collect();
        assert_eq!(order, vec![(1, 2), (0, 9), (3, 4), (5, 6)]);
    }
}
