//! 3D scatter of influence scores.
//!
//! x = source capacity, y = source investment, z = score, colour = score.
//! Hover shows both projects of the pair.

use h2influence_common::PairScore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::figure::Figure;

/// Appearance options for the scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterOptions {
    /// Plotly colour scale name
    #[serde(default = "default_color_scale")]
    pub color_scale: String,
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    /// 0.0–1.0
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_color_scale() -> String { "Viridis".to_string() }
fn default_marker_size() -> u32    { 5 }
fn default_opacity()     -> f64    { 0.7 }
fn default_title()       -> String { "Project Influence Scores".to_string() }

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            color_scale: default_color_scale(),
            marker_size: default_marker_size(),
            opacity:     default_opacity(),
            title:       default_title(),
        }
    }
}

// customdata layout per point:
// [Project1, Project2, Technology1, Technology2, Country1, Country2,
//  Date1, Date2, Capacity2, Investment2]
const HOVER_TEMPLATE: &[&str] = &[
    "<b>Project 1:</b> %{customdata[0]}",
    "Technology: %{customdata[2]}",
    "Country: %{customdata[4]}",
    "Capacity: %{x:.1f} kt H2/y",
    "Investment: %{y:.1f} MUSD",
    "Influence Score: %{z:.3f}",
    "Date Online: %{customdata[6]}",
    "<br>",
    "<b>Project 2:</b> %{customdata[1]}",
    "Technology: %{customdata[3]}",
    "Country: %{customdata[5]}",
    "Capacity: %{customdata[8]:.1f} kt H2/y",
    "Investment: %{customdata[9]:.1f} MUSD",
    "Date Online: %{customdata[7]}",
    "<br>",
    "<b>Influence Score:</b> %{z:.3f}",
];

fn axis(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "showgrid": true,
        "gridwidth": 1,
        "gridcolor": "lightgray",
    })
}

/// Build the scatter figure for a score table.
pub fn create_3d_scatter_plot(scores: &[PairScore], options: &ScatterOptions) -> Figure {
    let x: Vec<f64> = scores.iter().map(|s| s.source.capacity).collect();
    let y: Vec<f64> = scores.iter().map(|s| s.source.investment).collect();
    let z: Vec<f64> = scores.iter().map(|s| s.score).collect();
    let customdata: Vec<Value> = scores
        .iter()
        .map(|s| {
            json!([
                s.source.name,
                s.target.name,
                s.source.technology,
                s.target.technology,
                s.source.country,
                s.target.country,
                s.source.date_online,
                s.target.date_online,
                s.target.capacity,
                s.target.investment,
            ])
        })
        .collect();

    let trace = json!({
        "type": "scatter3d",
        "mode": "markers",
        "x": x,
        "y": y,
        "z": z.clone(),
        "customdata": customdata,
        "opacity": options.opacity,
        "marker": {
            "size": options.marker_size,
            "color": z,
            "colorscale": options.color_scale,
            "showscale": true,
            "colorbar": { "title": { "text": "Influence Score" } },
        },
        "hovertemplate": format!("{}<extra></extra>", HOVER_TEMPLATE.join("<br>")),
    });

    let layout = json!({
        "scene": {
            "camera": {
                "up":     { "x": 0, "y": 0, "z": 1 },
                "center": { "x": 0, "y": 0, "z": 0 },
                "eye":    { "x": 1.5, "y": 1.5, "z": 1.5 },
            },
            "xaxis": axis("Capacity (kt H2/y)"),
            "yaxis": axis("Investment Cost (MUSD)"),
            "zaxis": axis("Influence Score"),
            "bgcolor": "white",
        },
        "title": {
            "text": options.title,
            "x": 0.5,
            "y": 0.95,
            "xanchor": "center",
            "yanchor": "top",
        },
        "margin": { "l": 0, "r": 0, "t": 30, "b": 0 },
        "showlegend": false,
    });

    Figure {
        title: options.title.clone(),
        data: vec![trace],
        layout,
    }
}
