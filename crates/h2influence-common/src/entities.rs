//! Core entity types for the project influence tables.
//! Column names mirror the source spreadsheet exactly.

use serde::{Deserialize, Serialize};

/// Columns every input table must carry, named exactly as in the source data.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Project Name",
    "Technology",
    "Country",
    "Capacity (kt H2/y)",
    "Investment Cost (MUSD)",
    "Date Online",
];

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// One hydrogen production project as loaded from the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "Project Name")]
    pub name: String,
    #[serde(rename = "Technology")]
    pub technology: String,
    #[serde(rename = "Country")]
    pub country: String,
    /// kt H2 / year
    #[serde(rename = "Capacity (kt H2/y)")]
    pub capacity: f64,
    /// MUSD
    #[serde(rename = "Investment Cost (MUSD)")]
    pub investment: f64,
    /// Opaque label, e.g. "2027" or "Q3 2026". Never parsed.
    #[serde(rename = "Date Online")]
    pub date_online: String,
}

impl ProjectRecord {
    pub fn new(
        name: impl Into<String>,
        technology: impl Into<String>,
        country: impl Into<String>,
        capacity: f64,
        investment: f64,
        date_online: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            technology: technology.into(),
            country: country.into(),
            capacity,
            investment,
            date_online: date_online.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pair score
// ---------------------------------------------------------------------------

/// Directed influence of `source` relative to `target`.
/// Both snapshots are kept so the table is self-contained for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub source: ProjectRecord,
    pub target: ProjectRecord,
    pub score: f64,
}

impl PairScore {
    /// Flatten into the 13-column export shape.
    pub fn as_row(&self) -> PairScoreRow<'_> {
        PairScoreRow::from(self)
    }
}

/// Flat, denormalised view of a [`PairScore`].
/// Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScoreRow<'a> {
    #[serde(rename = "Project1")]
    pub project1: &'a str,
    #[serde(rename = "Project2")]
    pub project2: &'a str,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Technology1")]
    pub technology1: &'a str,
    #[serde(rename = "Country1")]
    pub country1: &'a str,
    #[serde(rename = "Capacity1")]
    pub capacity1: f64,
    #[serde(rename = "Investment1")]
    pub investment1: f64,
    #[serde(rename = "Date1")]
    pub date1: &'a str,
    #[serde(rename = "Technology2")]
    pub technology2: &'a str,
    #[serde(rename = "Country2")]
    pub country2: &'a str,
    #[serde(rename = "Capacity2")]
    pub capacity2: f64,
    #[serde(rename = "Investment2")]
    pub investment2: f64,
    #[serde(rename = "Date2")]
    pub date2: &'a str,
}

impl<'a> PairScoreRow<'a> {
    pub const COLUMNS: [&'static str; 13] = [
        "Project1",
        "Project2",
        "Score",
        "Technology1",
        "Country1",
        "Capacity1",
        "Investment1",
        "Date1",
        "Technology2",
        "Country2",
        "Capacity2",
        "Investment2",
        "Date2",
    ];
}

impl<'a> From<&'a PairScore> for PairScoreRow<'a> {
    fn from(pair: &'a PairScore) -> Self {
        let (s, t) = (&pair.source, &pair.target);
        Self {
            project1: &s.name,
            project2: &t.name,
            score: pair.score,
            technology1: &s.technology,
            country1: &s.country,
            capacity1: s.capacity,
            investment1: s.investment,
            date1: &s.date_online,
            technology2: &t.technology,
            country2: &t.country,
            capacity2: t.capacity,
            investment2: t.investment,
            date2: &t.date_online,
        }
    }
}
