//! Reduction of a clique's link weights to a single weight

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::Weight;

/// How a clique's pairwise link weights are collapsed into its weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightStrategy {
    /// Weakest link
    #[default]
    Minimum,

    /// Strongest link
    Maximum,

    /// Geometric mean of all links
    Intensity,
}

impl WeightStrategy {
    /// Map a numeric selector: 0 is minimum, 1 maximum, 2 intensity.
    /// Anything else falls back to minimum.
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => WeightStrategy::Maximum,
            2 => WeightStrategy::Intensity,
            _ => WeightStrategy::Minimum,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeightStrategy::Minimum => "minimum",
            WeightStrategy::Maximum => "maximum",
            WeightStrategy::Intensity => "intensity",
        }
    }

    /// Reduce link weights to one value. Returns `None` for an empty slice.
    ///
    /// Weights are expected to be positive; intensity is taken in log space so
    /// long or extreme-valued link lists do not overflow the product.
    pub fn reduce(self, weights: &[Weight]) -> Option<Weight> {
        let (&first, rest) = weights.split_first()?;

        let reduced = match self {
            WeightStrategy::Minimum => rest.iter()
                .fold(first, |min, &w| if w < min { w } else { min }),
            WeightStrategy::Maximum => rest.iter()
                .fold(first, |max, &w| if w > max { w } else { max }),
            WeightStrategy::Intensity => {
                let log_sum: f64 = weights.iter().map(|&w| (w as f64).ln()).sum();
                (log_sum / weights.len() as f64).exp() as Weight
            }
        };

        Some(reduced)
    }
}

impl fmt::Display for WeightStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeightStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimum" => Ok(WeightStrategy::Minimum),
            "max" | "maximum" => Ok(WeightStrategy::Maximum),
            "intensity" | "geometric" => Ok(WeightStrategy::Intensity),
            other => Err(anyhow::anyhow!("Unknown weight strategy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: [Weight; 3] = [2.0, 4.0, 8.0];

    #[test]
    fn test_reduce_triangle() {
        assert_eq!(WeightStrategy::Minimum.reduce(&TRIANGLE), Some(2.0));
        assert_eq!(WeightStrategy::Maximum.reduce(&TRIANGLE), Some(8.0));
        let intensity = WeightStrategy::Intensity.reduce(&TRIANGLE).unwrap();
        assert!((intensity - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_reduce_empty() {
        assert_eq!(WeightStrategy::Minimum.reduce(&[]), None);
        assert_eq!(WeightStrategy::Maximum.reduce(&[]), None);
        assert_eq!(WeightStrategy::Intensity.reduce(&[]), None);
    }

    #[test]
    fn test_single_weight_agrees() {
        for strategy in [WeightStrategy::Minimum, WeightStrategy::Maximum, WeightStrategy::Intensity] {
            let w = strategy.reduce(&[3.5]).unwrap();
            assert!((w - 3.5).abs() < 1e-6, "{} gave {}", strategy, w);
        }
    }

    #[test]
    fn test_intensity_does_not_overflow() {
        // The plain product of these is far outside f32 range
        let weights = vec![1.0e30; 45];
        let w = WeightStrategy::Intensity.reduce(&weights).unwrap();
        assert!(w.is_finite());
        assert!((w / 1.0e30 - 1.0).abs() < 1e-4);

        let tiny = vec![1.0e-30; 45];
        let w = WeightStrategy::Intensity.reduce(&tiny).unwrap();
        assert!(w > 0.0);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(WeightStrategy::from_index(0), WeightStrategy::Minimum);
        assert_eq!(WeightStrategy::from_index(1), WeightStrategy::Maximum);
        assert_eq!(WeightStrategy::from_index(2), WeightStrategy::Intensity);
        assert_eq!(WeightStrategy::from_index(7), WeightStrategy::Minimum);
    }

    #[test]
    fn test_parse() {
        assert_eq!("max".parse::<WeightStrategy>().unwrap(), WeightStrategy::Maximum);
        assert_eq!(" Intensity ".parse::<WeightStrategy>().unwrap(), WeightStrategy::Intensity);
        assert_eq!("minimum".parse::<WeightStrategy>().unwrap(), WeightStrategy::Minimum);
        assert!("median".parse::<WeightStrategy>().is_err());
    }
}
