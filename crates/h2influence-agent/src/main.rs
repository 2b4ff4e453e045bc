//! h2influence — Pairwise influence scoring for hydrogen production projects.
//! Entry point for the `h2influence` binary.

mod config;
mod pipeline;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("h2influence=debug,info")),
        )
        .init();

    info!("h2influence starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::load()?;
    info!(
        input = %config.input.path,
        sample_size = config.sampling.size,
        seed = config.sampling.seed,
        "Configuration loaded"
    );

    let summary = pipeline::run(&config)?;
    info!(
        population = summary.population,
        sample = summary.sample_size,
        pairs = summary.pairs,
        scores = %config.output.scores_csv,
        scatter = %config.output.scatter_html,
        heatmap = %config.output.heatmap_html,
        "Run complete"
    );

    Ok(())
}
