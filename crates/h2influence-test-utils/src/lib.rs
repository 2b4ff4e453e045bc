//! Shared fixtures for h2influence tests.
//!
//! Builders for [`ProjectRecord`]s, a small reference population, and helpers
//! that write project tables to a temporary directory.

use std::path::{Path, PathBuf};

use h2influence_common::ProjectRecord;
use tempfile::TempDir;

pub use pretty_assertions;

/// Project with only the scoring-relevant fields set.
pub fn project(name: &str, technology: &str, country: &str, capacity: f64) -> ProjectRecord {
    ProjectRecord::new(name, technology, country, capacity, 0.0, "2030")
}

/// Project with every field set.
pub fn project_full(
    name: &str,
    technology: &str,
    country: &str,
    capacity: f64,
    investment: f64,
    date_online: &str,
) -> ProjectRecord {
    ProjectRecord::new(name, technology, country, capacity, investment, date_online)
}

/// Twelve European projects spanning four countries and three technologies.
/// Max capacity 800, max investment 2000.
pub fn europe_population() -> Vec<ProjectRecord> {
    vec![
        project_full("NortH2", "Electrolysis", "NL", 800.0, 2000.0, "2030"),
        project_full("HyNetherlands", "Electrolysis", "NL", 100.0, 350.0, "2028"),
        project_full("Porthos Blue", "SMR+CCS", "NL", 300.0, 1200.0, "2026"),
        project_full("H2Ruhr", "Electrolysis", "DE", 60.0, 450.0, "2026"),
        project_full("GET H2 Nukleus", "Electrolysis", "DE", 120.0, 600.0, "2027"),
        project_full("Leuna Blue", "SMR+CCS", "DE", 250.0, 900.0, "2029"),
        project_full("HyDeal", "Electrolysis", "ES", 400.0, 1800.0, "2030"),
        project_full("Puertollano", "Electrolysis", "ES", 3.0, 150.0, "2022"),
        project_full("Cartagena Biogas", "Biomass", "ES", 15.0, 95.0, "2027"),
        project_full("Masshylia", "Electrolysis", "FR", 5.0, 100.0, "2025"),
        project_full("Lacq Hydrogen", "Electrolysis", "FR", 45.0, 300.0, "2028"),
        project_full("Normandy Blue", "SMR+CCS", "FR", 200.0, 850.0, "2029"),
    ]
}

/// Write `projects` as a CSV table with the exact input column names.
pub fn write_projects_csv(path: &Path, projects: &[ProjectRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for p in projects {
        writer.serialize(p)?;
    }
    writer.flush()?;
    Ok(())
}

/// Temporary directory holding `projects.csv`. Keep the `TempDir` alive
/// for as long as the path is used.
pub fn temp_project_table(projects: &[ProjectRecord]) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("projects.csv");
    write_projects_csv(&path, projects)?;
    Ok((dir, path))
}
