//! Configuration loading for h2influence.
//! Reads h2influence.toml from the current directory; every field has a default,
//! so a missing file (or a missing section) falls back to the defaults.
//!
//! Scoring weights are fixed and intentionally have no config entry.

use h2influence_ingestion::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use h2influence_report::{ScatterOptions, DEFAULT_HEATMAP_FILE, DEFAULT_SCATTER_FILE, DEFAULT_SCORES_FILE};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "h2influence.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scatter: ScatterOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
}

fn default_input_path() -> String { "europe_data.csv".to_string() }

impl Default for InputConfig {
    fn default() -> Self {
        Self { path: default_input_path() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "default_sample_size")]
    pub size: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_sample_size() -> usize { DEFAULT_SAMPLE_SIZE }
fn default_seed()        -> u64   { DEFAULT_SEED }

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { size: default_sample_size(), seed: default_seed() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_scores_csv")]
    pub scores_csv: String,
    #[serde(default = "default_scatter_html")]
    pub scatter_html: String,
    #[serde(default = "default_heatmap_html")]
    pub heatmap_html: String,
}

fn default_scores_csv()   -> String { DEFAULT_SCORES_FILE.to_string() }
fn default_scatter_html() -> String { DEFAULT_SCATTER_FILE.to_string() }
fn default_heatmap_html() -> String { DEFAULT_HEATMAP_FILE.to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            scores_csv:   default_scores_csv(),
            scatter_html: default_scatter_html(),
            heatmap_html: default_heatmap_html(),
        }
    }
}


impl Config {
    /// Load configuration from h2influence.toml in the working directory.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from `path`, or return the defaults if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.scatter.opacity) {
            anyhow::bail!("scatter.opacity must be within 0.0–1.0, got {}", self.scatter.opacity);
        }
        if self.scatter.marker_size == 0 {
            anyhow::bail!("scatter.marker_size must be positive");
        }
        Ok(())
    }
}
