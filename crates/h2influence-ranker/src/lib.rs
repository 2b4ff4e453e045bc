//! h2influence-ranker — Pairwise influence scoring engine.
//!
//! S(i, j) = 0.5·T + 0.3·G + 0.2·C over every ordered pair of distinct
//! projects in a sample.

pub mod scorer;
pub mod normalise;
pub mod weights;

pub use scorer::{compute_influence_score, compute_project_influences, score_pair, ComponentScores};
pub use weights::InfluenceWeights;
