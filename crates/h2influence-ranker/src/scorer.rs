//! Pairwise influence score computation.
//!
//! For every ordered pair (i, j), i ≠ j, of a sample:
//!
//!   S(i, j) = w_T·T + w_G·G + w_C·C
//!
//! T = same technology, G = same country, C = capacity closeness normalised
//! by the population maximum. Investment cost rides along as metadata and
//! does not enter the sum.

use h2influence_common::{PairScore, ProjectRecord, Result};
use h2influence_ingestion::NormalisationBounds;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::normalise::{capacity_similarity, geography_match, technology_match};
use crate::weights::InfluenceWeights;

/// The three component terms for one ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub technology: f64,
    pub geography: f64,
    pub capacity: f64,
}

impl ComponentScores {
    pub fn between(source: &ProjectRecord, target: &ProjectRecord, max_capacity: f64) -> Self {
        Self {
            technology: technology_match(&source.technology, &target.technology),
            geography: geography_match(&source.country, &target.country),
            capacity: capacity_similarity(source.capacity, target.capacity, max_capacity),
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.technology, self.geography, self.capacity]
    }
}

/// Weighted sum of the component terms.
pub fn compute_influence_score(components: &ComponentScores, weights: &InfluenceWeights) -> f64 {
    weights.technology * components.technology
        + weights.geography * components.geography
        + weights.capacity * components.capacity
}

/// Score a single ordered pair with the fixed weights.
///
/// Does not validate `max_capacity`; use [`compute_project_influences`]
/// for checked scoring.
pub fn score_pair(source: &ProjectRecord, target: &ProjectRecord, max_capacity: f64) -> f64 {
    let components = ComponentScores::between(source, target, max_capacity);
    compute_influence_score(&components, &InfluenceWeights::FIXED)
}

/// Score every ordered pair of distinct projects in `sample`.
///
/// Rows come out in (i ascending, j ascending) order with i == j skipped,
/// giving exactly n·(n−1) rows. Bounds are validated before any row is
/// produced; an invalid `max_capacity` yields a data error and no table.
pub fn compute_project_influences(
    sample: &[ProjectRecord],
    bounds: &NormalisationBounds,
) -> Result<Vec<PairScore>> {
    bounds.validate()?;

    let n = sample.len();
    if n < 2 {
        warn!(n, "Sample has fewer than two projects; no pairs to score");
    }

    let weights = InfluenceWeights::FIXED;
    let mut scores = Vec::with_capacity(n * n.saturating_sub(1));

    for (i, source) in sample.iter().enumerate() {
        for (j, target) in sample.iter().enumerate() {
            if i == j {
                continue;
            }
            let components = ComponentScores::between(source, target, bounds.max_capacity);
            let score = compute_influence_score(&components, &weights);
            scores.push(PairScore {
                source: source.clone(),
                target: target.clone(),
                score,
            });
        }
    }

    debug!(max_capacity = bounds.max_capacity, "Scoring pass complete");
    info!(n_projects = n, n_pairs = scores.len(), "Computed project influence scores");
    Ok(scores)
}
