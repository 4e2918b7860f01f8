//! Self-contained HTML output for a skill graph.
//!
//! Layout happens in the browser: the page embeds the node and edge lists and
//! hands them to vis-network with a repulsion solver.

mod assets;

pub use assets::{VIS_NETWORK_CDNS, heading_block};

use crate::config::{NetworkConfig, Physics};
use crate::graph::GraphData;
use assets::PageParts;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page and canvas settings for one rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkOptions {
    pub height: String,
    pub width: String,
    pub bgcolor: String,
    pub font_color: String,
    pub heading: String,
    pub physics: Physics,
}

impl NetworkOptions {
    pub fn from_config(network: &NetworkConfig) -> Self {
        Self {
            height: network.height.clone(),
            width: network.width.clone(),
            bgcolor: network.bgcolor.clone(),
            font_color: network.font_color.clone(),
            heading: network.title.clone(),
            physics: network.physics,
        }
    }

    /// vis-network options object.
    pub fn vis_options(&self) -> serde_json::Value {
        let p = &self.physics;
        serde_json::json!({
            "nodes": {
                "shape": "dot",
                "font": { "color": self.font_color }
            },
            "edges": {
                "color": { "inherit": false }
            },
            "interaction": {
                "dragNodes": true,
                "hover": true,
                "tooltipDelay": 200
            },
            "physics": {
                "enabled": true,
                "solver": "repulsion",
                "repulsion": {
                    "nodeDistance": p.node_distance,
                    "centralGravity": p.central_gravity,
                    "springLength": p.spring_length,
                    "springConstant": p.spring_strength,
                    "damping": p.damping
                },
                "minVelocity": 0.75,
                "stabilization": { "iterations": 200 }
            }
        })
    }
}

pub struct Renderer {
    options: NetworkOptions,
}

impl Renderer {
    pub fn new(options: NetworkOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, data: &GraphData) -> Result<String, RenderError> {
        let nodes_json = script_json(&data.nodes)?;
        let edges_json = script_json(&data.edges)?;
        let options_json = script_json(&self.options.vis_options())?;
        let heading = escape_html(&self.options.heading);

        let html = assets::page(&PageParts {
            title: &heading,
            heading: &heading,
            bgcolor: &self.options.bgcolor,
            font_color: &self.options.font_color,
            width: &self.options.width,
            height: &self.options.height,
            nodes_json: &nodes_json,
            edges_json: &edges_json,
            options_json: &options_json,
        });

        tracing::debug!(
            nodes = data.nodes.len(),
            edges = data.edges.len(),
            bytes = html.len(),
            "rendered page"
        );
        Ok(html)
    }
}

/// JSON that can sit inside a `<script>` element without closing it.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
