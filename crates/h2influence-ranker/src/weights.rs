//! Weight vector for pairwise influence scoring.
//!
//! The weights are fixed design constants. They are deliberately not read
//! from configuration: changing them changes every published score.

use serde::{Deserialize, Serialize};

/// The 3-component weight vector W. Weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfluenceWeights {
    /// Same technology (T)
    pub technology: f64,
    /// Same country (G)
    pub geography: f64,
    /// Capacity closeness (C)
    pub capacity: f64,
}

impl InfluenceWeights {
    pub const FIXED: Self = Self {
        technology: 0.5,
        geography:  0.3,
        capacity:   0.2,
    };

    /// Validate that all weights sum to ~1.0
    pub fn validate(&self) -> bool {
        let sum = self.technology + self.geography + self.capacity;
        (sum - 1.0).abs() < 1e-9
    }

    /// Order: technology, geography, capacity.
    pub fn as_array(&self) -> [f64; 3] {
        [self.technology, self.geography, self.capacity]
    }
}

impl Default for InfluenceWeights {
    fn default() -> Self {
        Self::FIXED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_weights_sum_to_one() {
        assert!(InfluenceWeights::FIXED.validate(), "Fixed weights must sum to 1.0");
    }

    #[test]
    fn test_technology_dominates() {
        let w = InfluenceWeights::default();
        assert!(w.technology > w.geography && w.geography > w.capacity);
        assert_eq!(w.as_array(), [0.5, 0.3, 0.2]);
    }

    #[test]
    fn test_validate_detects_drift() {
        let w = InfluenceWeights { capacity: 0.3, ..InfluenceWeights::FIXED };
        assert!(!w.validate());
    }
}
