//! Standalone interactive HTML documents.
//!
//! Each figure becomes one self-contained page that loads plotly.js from
//! its CDN and renders the embedded figure JSON.

use std::path::Path;

use chrono::Utc;
use h2influence_common::{InfluenceError, Result};
use minijinja::{context, Environment};
use tracing::info;

use crate::figure::Figure;

pub const DEFAULT_SCATTER_FILE: &str = "influence_scores_3d.html";
pub const DEFAULT_HEATMAP_FILE: &str = "country_influence_heatmap.html";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const FIGURE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <script src="{{ plotly_src|safe }}" charset="utf-8"></script>
    <style>
        html, body { margin: 0; height: 100%; font-family: sans-serif; }
        #figure { width: 100%; height: calc(100% - 2rem); }
        footer { height: 2rem; line-height: 2rem; padding: 0 1rem; color: #888; font-size: 0.8rem; }
    </style>
</head>
<body>
    <div id="figure"></div>
    <footer>Generated {{ generated_at }}</footer>
    <script>
        const fig = {{ figure_json|safe }};
        Plotly.newPlot("figure", fig.data, fig.layout, { responsive: true });
    </script>
</body>
</html>
"##;

/// Render `figure` as a complete HTML document.
pub fn render_html(figure: &Figure) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("figure.html", FIGURE_TEMPLATE)
        .map_err(|e| InfluenceError::Render(e.to_string()))?;
    let template = env
        .get_template("figure.html")
        .map_err(|e| InfluenceError::Render(e.to_string()))?;

    let figure_json = figure.to_embedded_json()?;
    template
        .render(context! {
            title => &figure.title,
            plotly_src => PLOTLY_CDN,
            figure_json => figure_json,
            generated_at => Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        })
        .map_err(|e| InfluenceError::Render(e.to_string()))
}

/// Write the scatter and heatmap documents.
/// Both are rendered before either file is touched.
pub fn save_plots(scatter: &Figure, heatmap: &Figure, scatter_path: &Path, heatmap_path: &Path) -> Result<()> {
    let pages = [(scatter, render_html(scatter)?, scatter_path), (heatmap, render_html(heatmap)?, heatmap_path)];
    for (figure, html, path) in pages {
        std::fs::write(path, html)?;
        info!(path = %path.display(), title = %figure.title, "Figure saved");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn figure(title: &str) -> Figure {
        Figure {
            title: title.to_string(),
            data: vec![json!({"type": "heatmap", "z": [[1.0]]})],
            layout: json!({"title": {"text": title}}),
        }
    }

    #[test]
    fn test_render_embeds_figure_and_cdn() {
        let html = render_html(&figure("Scores")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Scores</title>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains(r#""type":"heatmap""#));
        assert!(html.contains("Plotly.newPlot"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_html(&figure("A & B <x>")).unwrap();
        assert!(html.contains("<title>A &amp; B &lt;x&gt;</title>"));
    }
}
