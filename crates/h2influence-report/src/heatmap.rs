//! Country-pair heatmap of mean influence scores.

use h2influence_common::PairScore;
use serde_json::json;

use crate::aggregate::country_pair_means;
use crate::figure::Figure;

const HEATMAP_TITLE: &str = "Average Influence Scores Between Countries";

/// Build the heatmap figure. Rows are source countries (Country 1), columns
/// target countries (Country 2); empty cells render blank.
pub fn create_country_heatmap(scores: &[PairScore]) -> Figure {
    let matrix = country_pair_means(scores);

    let trace = json!({
        "type": "heatmap",
        "x": matrix.columns,
        "y": matrix.rows,
        "z": matrix.values,
        "colorbar": { "title": { "text": "Influence Score" } },
        "hovertemplate": "Country 2: %{x}<br>Country 1: %{y}<br>Influence Score: %{z}<extra></extra>",
    });

    let layout = json!({
        "title": { "text": HEATMAP_TITLE },
        "xaxis": { "title": { "text": "Country 2" }, "side": "bottom" },
        // Top row first, as in a matrix.
        "yaxis": { "title": { "text": "Country 1" }, "autorange": "reversed" },
    });

    Figure {
        title: HEATMAP_TITLE.to_string(),
        data: vec![trace],
        layout,
    }
}
