//! Configuration for weighted clique construction

use anyhow::Result;
use serde::{Serialize, Deserialize};
use crate::clique::WeightStrategy;

/// What to do when a clique's links are not all present with positive weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkWeightPolicy {
    /// Log the problem and reduce whatever weights were collected
    #[default]
    Warn,

    /// Fail construction of the clique
    Reject,
}

/// Default configuration for weighted clique construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How pairwise link weights are collapsed into the clique weight
    pub strategy: WeightStrategy,

    /// Handling of missing or non-positive link weights
    pub link_policy: LinkWeightPolicy,

    /// Smallest clique kept by batch construction
    pub min_clique_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: WeightStrategy::Minimum,
            link_policy: LinkWeightPolicy::Warn,
            min_clique_size: 2,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        strategy: WeightStrategy,
        link_policy: LinkWeightPolicy,
        min_clique_size: usize,
    ) -> Self {
        Self {
            strategy,
            link_policy,
            min_clique_size,
        }
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        if config.min_clique_size < 2 {
            return Err(anyhow::anyhow!(
                "min_clique_size must be at least 2, got {}",
                config.min_clique_size
            ));
        }
        Ok(config)
    }
}
