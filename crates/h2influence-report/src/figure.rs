//! Plotly figure specification.

use serde::Serialize;
use serde_json::Value;

/// A figure as plotly.js consumes it: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Document title; not part of the plotly payload.
    #[serde(skip)]
    pub title: String,
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// JSON payload that is safe to embed inside a `<script>` element.
    pub fn to_embedded_json(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace("</", "<\\/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let fig = Figure {
            title: "t".into(),
            data: vec![json!({"name": "</script><b>"})],
            layout: json!({}),
        };
        let out = fig.to_embedded_json().unwrap();
        assert!(!out.contains("</script>"));
        assert!(out.contains("<\\/script>"));
        assert!(!out.contains("\"title\""));
    }
}
