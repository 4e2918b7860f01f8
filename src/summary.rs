use crate::config::{NETWORK_CONFIG_KEY, NetworkConfig, SkillConfig};
use crate::graph::SkillGraph;
use crate::model::{Category, Child};
use std::fmt;

/// Plain-text report of a loaded skill file and the graph built from it.
pub struct Summary<'a> {
    config: &'a SkillConfig,
    graph: &'a SkillGraph,
}

impl<'a> Summary<'a> {
    pub fn new(config: &'a SkillConfig, graph: &'a SkillGraph) -> Self {
        Self { config, graph }
    }

    /// Node and edge counts without the legend chain.
    pub fn skill_counts(&self) -> (usize, usize) {
        let legend_nodes = self.graph.nodes().filter(|n| n.is_legend()).count();
        let legend_edges = self
            .graph
            .edges()
            .filter(|(a, b, _)| is_legend(self.graph, a) && is_legend(self.graph, b))
            .count();
        (
            self.graph.node_count() - legend_nodes,
            self.graph.edge_count() - legend_edges,
        )
    }

    pub fn graph_line(&self) -> String {
        let network = &self.config.network;
        if !network.legends {
            return format!(
                "Graph with {} nodes and {} edges",
                self.graph.node_count(),
                self.graph.edge_count()
            );
        }

        let (nodes, edges) = self.skill_counts();
        let max = network.max_proficiency;
        let legend = if max == 1 {
            "There is 1 additional node with a legend".to_string()
        } else {
            format!("There are {} legend nodes and {} edges", max, max - 1)
        };
        format!("Graph with {} nodes and {} edges\n{}", nodes, edges, legend)
    }
}

fn is_legend(graph: &SkillGraph, id: &str) -> bool {
    graph.node(id).is_some_and(|n| n.is_legend())
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_network(f, &self.config.network)?;
        for category in &self.config.taxonomy.categories {
            writeln!(f, "{}", category.name)?;
            write_children(f, &category.children, "")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.graph_line())
    }
}

fn write_network(f: &mut fmt::Formatter<'_>, network: &NetworkConfig) -> fmt::Result {
    writeln!(f, "{}:", NETWORK_CONFIG_KEY)?;
    writeln!(f, "  title: {}", network.title)?;
    writeln!(f, "  max_proficiency: {}", network.max_proficiency)?;
    writeln!(f, "  legends: {}", network.legends)?;
    writeln!(f, "  nodes_sizes: {:?}", network.nodes_sizes)?;
    writeln!(f, "  internal_colors: {}", network.internal_colors.join(", "))?;
    writeln!(f, "  leaf_colors: {}", network.leaf_colors.join(", "))?;
    writeln!(
        f,
        "  edges: width {} colour {}",
        network.edge_width, network.edge_color
    )?;
    writeln!(
        f,
        "  page: {} on {}, {} x {}",
        network.font_color, network.bgcolor, network.width, network.height
    )
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Child], prefix: &str) -> fmt::Result {
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx == children.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        match child {
            Child::Category(Category { name, children }) => {
                writeln!(f, "{}{}{}", prefix, connector, name)?;
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                write_children(f, children, &child_prefix)?;
            }
            Child::Leaves(group) if group.skills.is_empty() => {
                writeln!(f, "{}{}[{}]", prefix, connector, group.level)?;
            }
            Child::Leaves(group) => {
                writeln!(
                    f,
                    "{}{}[{}] {}",
                    prefix,
                    connector,
                    group.level,
                    group.skills.join(", ")
                )?;
            }
        }
    }
    Ok(())
}
