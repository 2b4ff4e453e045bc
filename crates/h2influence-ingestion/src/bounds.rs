//! Normalisation bounds for the capacity term.
//!
//! Bounds are taken over the FULL population, never the sample, so that
//! scores stay comparable between different samples of the same table.

use h2influence_common::{InfluenceError, ProjectRecord, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalisationBounds {
    /// Largest capacity in the population (kt H2/y). Divisor of the capacity term.
    pub max_capacity: f64,
    /// Largest investment cost in the population (MUSD).
    /// Carried alongside capacity but not used by the current score.
    pub max_investment: f64,
}

impl NormalisationBounds {
    pub fn new(max_capacity: f64, max_investment: f64) -> Self {
        Self { max_capacity, max_investment }
    }

    /// Maxima over every record in `population`.
    pub fn from_population(population: &[ProjectRecord]) -> Result<Self> {
        if population.is_empty() {
            return Err(InfluenceError::Data(
                "cannot derive normalisation bounds from an empty population".to_string(),
            ));
        }

        let max_capacity = population
            .iter()
            .map(|p| p.capacity)
            .fold(f64::NEG_INFINITY, f64::max);
        let max_investment = population
            .iter()
            .map(|p| p.investment)
            .fold(f64::NEG_INFINITY, f64::max);

        debug!(max_capacity, max_investment, "Computed normalisation bounds");
        Ok(Self { max_capacity, max_investment })
    }

    /// `max_capacity` must be a positive finite divisor.
    pub fn validate(&self) -> Result<()> {
        if !self.max_capacity.is_finite() || self.max_capacity <= 0.0 {
            return Err(InfluenceError::Data(format!(
                "max_capacity must be a positive finite number, got {}",
                self.max_capacity
            )));
        }
        Ok(())
    }
}
