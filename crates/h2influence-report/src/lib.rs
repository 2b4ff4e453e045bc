//! h2influence-report — Flat export and interactive figures for a score table.
//!
//! Consumes the `Vec<PairScore>` produced by the ranker; never modifies it.

pub mod aggregate;
pub mod export;
pub mod figure;
pub mod heatmap;
pub mod html;
pub mod scatter;

pub use aggregate::{country_pair_means, CountryMatrix};
pub use export::{save_scores_to_csv, write_scores, DEFAULT_SCORES_FILE};
pub use figure::Figure;
pub use heatmap::create_country_heatmap;
pub use html::{render_html, save_plots, DEFAULT_HEATMAP_FILE, DEFAULT_SCATTER_FILE};
pub use scatter::{create_3d_scatter_plot, ScatterOptions};
