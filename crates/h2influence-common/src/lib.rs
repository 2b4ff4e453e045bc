//! h2influence-common — Shared entities and errors used across all h2influence crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{PairScore, ProjectRecord, REQUIRED_COLUMNS};
pub use error::{InfluenceError, Result};
