//! h2influence-ingestion — Loading, normalisation bounds and sampling of project records.
//!
//! Pipeline position:
//!   CSV table → [`loader`] → population → [`bounds`] + [`sampling`] → scorer

pub mod loader;
pub mod bounds;
pub mod sampling;

pub use bounds::NormalisationBounds;
pub use loader::{load_data, parse_projects};
pub use sampling::{sample_projects, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
