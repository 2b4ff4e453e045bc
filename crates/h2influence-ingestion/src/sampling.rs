//! Seeded sampling of the project population.
//!
//! The scorer is O(n²), so it runs on a fixed-size random subset. The seed
//! makes the subset reproducible: the same (population, size, seed) always
//! yields the same records in the same order.

use h2influence_common::{InfluenceError, ProjectRecord, Result};
use rand::{rngs::StdRng, seq::index, SeedableRng};
use tracing::{debug, warn};

/// Default number of projects scored per run (20 → 380 ordered pairs).
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Default sampling seed.
pub const DEFAULT_SEED: u64 = 42;

/// Select `sample_size` distinct records without replacement.
///
/// Records are returned in selection order, which becomes the scorer's
/// iteration order.
pub fn sample_projects(
    population: &[ProjectRecord],
    sample_size: usize,
    seed: u64,
) -> Result<Vec<ProjectRecord>> {
    if sample_size > population.len() {
        return Err(InfluenceError::Data(format!(
            "cannot sample {} projects from a population of {} without replacement",
            sample_size,
            population.len()
        )));
    }
    if sample_size < 2 {
        warn!(sample_size, "Sample smaller than 2 produces no pairs");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let sample: Vec<ProjectRecord> = index::sample(&mut rng, population.len(), sample_size)
        .into_iter()
        .map(|i| population[i].clone())
        .collect();

    debug!(
        population = population.len(),
        sample_size,
        seed,
        "Sampled projects"
    );
    Ok(sample)
}
