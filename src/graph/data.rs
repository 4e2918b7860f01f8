use super::SkillGraph;
use crate::model::{NodeKind, SkillNode};
use serde::Serialize;

/// Graph data in vis-network's `{nodes, edges}` shape.
#[derive(Debug, Clone, Serialize)]
pub struct GraphData {
    pub nodes: Vec<SkillNode>,
    pub edges: Vec<GraphLink>,
    pub metadata: GraphMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphLink {
    pub from: String,
    pub to: String,
    pub width: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphMetadata {
    pub categories: usize,
    pub skills: usize,
    pub legend_nodes: usize,
    pub edges: usize,
}

impl GraphData {
    pub fn from_graph(graph: &SkillGraph) -> Self {
        let nodes: Vec<SkillNode> = graph.nodes().cloned().collect();

        let edges: Vec<GraphLink> = graph
            .edges()
            .map(|(from, to, edge)| GraphLink {
                from: from.to_string(),
                to: to.to_string(),
                width: edge.width,
                color: edge.color.clone(),
                smooth: edge.smooth,
            })
            .collect();

        let metadata = GraphMetadata::from_nodes(&nodes, edges.len());

        GraphData {
            nodes,
            edges,
            metadata,
        }
    }
}

impl GraphMetadata {
    fn from_nodes(nodes: &[SkillNode], edges: usize) -> Self {
        let mut metadata = GraphMetadata {
            edges,
            ..Default::default()
        };
        for node in nodes {
            match node.kind {
                NodeKind::Category { .. } => metadata.categories += 1,
                NodeKind::Skill { .. } => metadata.skills += 1,
                NodeKind::Legend { .. } => metadata.legend_nodes += 1,
                NodeKind::Bare => {}
            }
        }
        metadata
    }
}
