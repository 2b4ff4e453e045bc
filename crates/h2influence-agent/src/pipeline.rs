//! End-to-end run: load → bounds → sample → score → export → figures.
//!
//! Every fallible step runs before the first file is written, so a failed
//! run leaves no partial table behind.

use std::path::Path;

use h2influence_common::Result;
use h2influence_ingestion::{load_data, sample_projects, NormalisationBounds};
use h2influence_ranker::compute_project_influences;
use h2influence_report::{create_3d_scatter_plot, create_country_heatmap, save_plots, save_scores_to_csv};
use tracing::info;

use crate::config::Config;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub population: usize,
    pub sample_size: usize,
    pub pairs: usize,
    pub bounds: NormalisationBounds,
}

pub fn run(config: &Config) -> Result<RunSummary> {
    let population = load_data(Path::new(&config.input.path))?;

    // Global maxima, so scores are comparable across samples.
    let bounds = NormalisationBounds::from_population(&population)?;
    bounds.validate()?;
    info!(
        max_capacity = bounds.max_capacity,
        max_investment = bounds.max_investment,
        "Normalisation bounds"
    );

    let sample = sample_projects(&population, config.sampling.size, config.sampling.seed)?;
    let scores = compute_project_influences(&sample, &bounds)?;

    let scatter = create_3d_scatter_plot(&scores, &config.scatter);
    let heatmap = create_country_heatmap(&scores);

    save_scores_to_csv(&scores, Path::new(&config.output.scores_csv))?;
    save_plots(
        &scatter,
        &heatmap,
        Path::new(&config.output.scatter_html),
        Path::new(&config.output.heatmap_html),
    )?;

    Ok(RunSummary {
        population: population.len(),
        sample_size: sample.len(),
        pairs: scores.len(),
        bounds,
    })
}
