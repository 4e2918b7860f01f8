mod builder;
mod data;
mod legend;
mod skill_graph;

pub use builder::{BuildError, TreeBuilder, leaf_color, level_label, scaled_leaf_size};
pub use data::{GraphData, GraphLink, GraphMetadata};
pub use legend::{add_legend, legend_id};
pub use skill_graph::SkillGraph;
