//! Error types for clique construction and comparison

use thiserror::Error;
use crate::{NodeId, Weight};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliqueError {
    #[error("index {index} out of range for clique of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("cannot order cliques of different sizes ({left} vs {right})")]
    SizeMismatch { left: usize, right: usize },

    /// `weight` is `None` when the network has no link between the nodes
    #[error("link weight between {a} and {b} is zero, negative or missing ({weight:?})")]
    InvalidLinkWeight { a: NodeId, b: NodeId, weight: Option<Weight> },

    #[error("collected {found} link weights, clique needs {expected}")]
    LinkCountMismatch { expected: usize, found: usize },

    #[error("no link weights to reduce for clique of size {size}")]
    NoLinkWeights { size: usize },

    #[error("weight {weight} is not a finite positive number")]
    InvalidWeight { weight: Weight },

    #[error("stored weight {stored} does not match {derived} derived from its links")]
    WeightMismatch { stored: Weight, derived: Weight },
}
