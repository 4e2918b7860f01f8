//! Turns a taxonomy into graph nodes and edges.

use super::SkillGraph;
use crate::config::NetworkConfig;
use crate::model::{Category, Child, LeafGroup, NodeKind, SkillEdge, SkillNode, Taxonomy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error(
        "category `{node}` sits at depth {depth}, but nodes_sizes has {sizes} entries and internal_colors has {colors}"
    )]
    DepthOutOfRange {
        node: String,
        depth: usize,
        sizes: usize,
        colors: usize,
    },
    #[error("skill `{leaf}` has level {level}, expected 1..={max}")]
    LevelOutOfRange { leaf: String, level: u32, max: u32 },
    #[error("no leaf colour for level {level} ({available} configured)")]
    LeafColorMissing { level: u32, available: usize },
}

/// Node size for a skill at `level`, scaled linearly so that
/// `max_proficiency` maps to `max_leaf_size`.
pub fn scaled_leaf_size(max_leaf_size: f64, max_proficiency: u32, level: u32) -> f64 {
    if level == max_proficiency {
        return max_leaf_size;
    }
    (max_leaf_size / f64::from(max_proficiency)) * f64::from(level)
}

/// Colour for a proficiency level; level 1 uses the first entry.
pub fn leaf_color(network: &NetworkConfig, level: u32) -> Result<&str, BuildError> {
    level
        .checked_sub(1)
        .and_then(|idx| network.leaf_colors.get(idx as usize))
        .map(String::as_str)
        .ok_or(BuildError::LeafColorMissing {
            level,
            available: network.leaf_colors.len(),
        })
}

/// Tooltip shown for a skill and label shown for a legend entry.
pub fn level_label(level: u32, max_proficiency: u32) -> String {
    format!("Skill level: {}/{}", level, max_proficiency)
}

/// Depth-first walk over the taxonomy that writes into a `SkillGraph`.
pub struct TreeBuilder<'a> {
    network: &'a NetworkConfig,
    edge: SkillEdge,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(network: &'a NetworkConfig) -> Self {
        Self {
            network,
            edge: network.edge_style(),
        }
    }

    /// Add every category and skill. Top-level categories are numbered from 1
    /// and that number is the group of everything below them.
    pub fn build(&self, taxonomy: &Taxonomy, graph: &mut SkillGraph) -> Result<(), BuildError> {
        for (idx, category) in taxonomy.categories.iter().enumerate() {
            let group = (idx + 1).to_string();
            self.add_category(category, 0, &group, graph)?;
            self.add_children(&category.name, &category.children, 1, &group, graph)?;
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "skill tree built"
        );
        Ok(())
    }

    fn add_children(
        &self,
        parent: &str,
        children: &[Child],
        depth: usize,
        group: &str,
        graph: &mut SkillGraph,
    ) -> Result<(), BuildError> {
        for child in children {
            match child {
                Child::Category(category) => {
                    self.add_category(category, depth, group, graph)?;
                    graph.add_edge(parent, &category.name, self.edge.clone());
                    self.add_children(&category.name, &category.children, depth + 1, group, graph)?;
                }
                Child::Leaves(leaves) => self.add_leaves(parent, leaves, group, graph)?,
            }
        }
        Ok(())
    }

    fn add_category(
        &self,
        category: &Category,
        depth: usize,
        group: &str,
        graph: &mut SkillGraph,
    ) -> Result<(), BuildError> {
        let size = self.network.nodes_sizes.get(depth);
        let color = self.network.internal_colors.get(depth);

        let (Some(&size), Some(color)) = (size, color) else {
            return Err(BuildError::DepthOutOfRange {
                node: category.name.clone(),
                depth,
                sizes: self.network.nodes_sizes.len(),
                colors: self.network.internal_colors.len(),
            });
        };

        graph.add_node(
            SkillNode::new(&category.name, NodeKind::Category { depth })
                .with_size(size)
                .with_color(color)
                .with_group(group),
        );
        Ok(())
    }

    fn add_leaves(
        &self,
        parent: &str,
        leaves: &LeafGroup,
        group: &str,
        graph: &mut SkillGraph,
    ) -> Result<(), BuildError> {
        let max = self.network.max_proficiency;
        let level = leaves.level;

        if level == 0 || level > max {
            return Err(BuildError::LevelOutOfRange {
                leaf: leaves.skills.first().cloned().unwrap_or_default(),
                level,
                max,
            });
        }

        let color = leaf_color(self.network, level)?;
        let max_leaf_size = self.network.max_leaf_size().ok_or(BuildError::DepthOutOfRange {
            node: parent.to_string(),
            depth: 0,
            sizes: 0,
            colors: self.network.internal_colors.len(),
        })?;
        let size = scaled_leaf_size(max_leaf_size, max, level);
        let title = level_label(level, max);

        for skill in &leaves.skills {
            graph.add_node(
                SkillNode::new(skill, NodeKind::Skill { level })
                    .with_size(size)
                    .with_color(color)
                    .with_group(group)
                    .with_title(&title),
            );
            graph.add_edge(parent, skill, self.edge.clone());
        }
        Ok(())
    }
}
