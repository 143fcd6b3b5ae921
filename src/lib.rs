//! Clique value types for weighted clique percolation
//!
//! Cliques are stored as sorted node lists so that the same node set always
//! compares, orders and hashes the same way, whatever order it was found in.
//! Weighted cliques collapse their pairwise link weights into a single scalar.

pub mod config;
pub mod error;
pub mod graph;
pub mod clique;
pub mod batch;

pub use anyhow::{Result, anyhow};
pub use clique::{Clique, Edge, NodeSet, WeightStrategy, Weighted, WeightedClique};
pub use config::{Config, LinkWeightPolicy};
pub use error::CliqueError;
pub use graph::{NetworkBuilder, SymmetricNetwork, WeightedNetwork};

/// Node identifier as used by the network and all clique types
pub type NodeId = u32;

/// Link and clique weight
pub type Weight = f32;
