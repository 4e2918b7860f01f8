use crate::model::{SkillEdge, SkillNode};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Undirected graph of skill nodes, keyed by node id.
///
/// Node ids are names, so adding an id twice merges the two records instead of
/// creating a second node, and adding an edge twice updates the existing one.
#[derive(Debug, Clone, Default)]
pub struct SkillGraph {
    graph: UnGraph<SkillNode, SkillEdge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl SkillGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, merging into the existing node when the id is taken.
    pub fn add_node(&mut self, node: SkillNode) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&node.id) {
            tracing::warn!(id = %node.id, "duplicate node id, merging attributes");
            self.graph[idx].merge(node);
            return idx;
        }

        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_indices.insert(id, idx);
        idx
    }

    /// Connect two ids, creating bare nodes for ids not seen yet.
    /// An existing edge between the pair (in either order) gets the new attributes.
    pub fn add_edge(&mut self, a: &str, b: &str, edge: SkillEdge) {
        let a_idx = self.index_or_bare(a);
        let b_idx = self.index_or_bare(b);

        if a_idx == b_idx {
            tracing::warn!(id = a, "self-loop between a node and itself");
        } else if self.graph.find_edge(a_idx, b_idx).is_some() {
            tracing::warn!(a, b, "duplicate edge, updating attributes");
        }

        self.graph.update_edge(a_idx, b_idx, edge);
    }

    fn index_or_bare(&mut self, id: &str) -> NodeIndex {
        match self.node_indices.get(id) {
            Some(&idx) => idx,
            None => self.add_node(SkillNode::bare(id)),
        }
    }

    pub fn node(&self, id: &str) -> Option<&SkillNode> {
        self.node_indices.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_indices.get(a), self.node_indices.get(b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn edge(&self, a: &str, b: &str) -> Option<&SkillEdge> {
        let a = *self.node_indices.get(a)?;
        let b = *self.node_indices.get(b)?;
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &SkillNode> {
        self.graph.node_weights()
    }

    /// Edges in insertion order as `(id, id, attributes)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &SkillEdge)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
                e.weight(),
            )
        })
    }

    /// Neighbours of a node, or an empty list for an unknown id.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        match self.node_indices.get(id) {
            Some(&idx) => self
                .graph
                .neighbors(idx)
                .map(|n| self.graph[n].id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    fn edge(width: f64) -> SkillEdge {
        SkillEdge {
            width,
            color: "#fff".to_string(),
            smooth: None,
        }
    }

    #[test]
    fn test_add_node_merges_duplicate_ids() {
        let mut graph = SkillGraph::new();
        let first =
            graph.add_node(SkillNode::new("Rust", NodeKind::Skill { level: 2 }).with_size(12.0));
        let second =
            graph.add_node(SkillNode::new("Rust", NodeKind::Skill { level: 4 }).with_size(24.0));

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("Rust").unwrap().size, Some(24.0));
    }

    #[test]
    fn test_duplicate_edge_in_either_direction_updates() {
        let mut graph = SkillGraph::new();
        graph.add_node(SkillNode::bare("a"));
        graph.add_node(SkillNode::bare("b"));
        graph.add_edge("a", "b", edge(1.0));
        graph.add_edge("b", "a", edge(3.0));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge("a", "b").unwrap().width, 3.0);
        assert!(graph.contains_edge("b", "a"));
    }

    #[test]
    fn test_edge_to_unknown_id_creates_bare_node() {
        let mut graph = SkillGraph::new();
        graph.add_edge("parent", "child", edge(1.0));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node("child").unwrap().kind, NodeKind::Bare);
        assert_eq!(graph.neighbors("parent"), vec!["child"]);
    }

    #[test]
    fn test_edges_report_ids() {
        let mut graph = SkillGraph::new();
        graph.add_edge("x", "y", edge(2.0));
        let edges: Vec<_> = graph.edges().map(|(a, b, e)| (a, b, e.width)).collect();
        assert_eq!(edges, vec![("x", "y", 2.0)]);
        assert!(graph.neighbors("missing").is_empty());
    }
}
