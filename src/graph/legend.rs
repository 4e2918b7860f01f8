use super::SkillGraph;
use super::builder::{BuildError, leaf_color, level_label};
use crate::config::NetworkConfig;
use crate::model::{NodeKind, Placement, SkillNode};

const LEGEND_X: f64 = -600.0;
const LEGEND_STEP: f64 = 50.0;
const LEGEND_GROUP: &str = "0";

pub fn legend_id(level: u32) -> String {
    format!("legend-{}", level)
}

/// Add one box per proficiency level, stacked upwards from the origin and
/// chained together. The boxes stay under physics so they can be dragged.
pub fn add_legend(network: &NetworkConfig, graph: &mut SkillGraph) -> Result<(), BuildError> {
    let max = network.max_proficiency;
    let edge = network.edge_style();

    for level in 1..=max {
        let color = leaf_color(network, level)?;
        graph.add_node(
            SkillNode::new(legend_id(level), NodeKind::Legend { level })
                .with_label(level_label(level, max))
                .with_group(LEGEND_GROUP)
                .with_shape("box")
                .with_color(color)
                .with_placement(Placement {
                    x: LEGEND_X,
                    y: -LEGEND_STEP * f64::from(level - 1),
                    fixed: false,
                    physics: true,
                }),
        );

        if level > 1 {
            graph.add_edge(&legend_id(level - 1), &legend_id(level), edge.clone());
        }
    }

    tracing::debug!(levels = max, "legend added");
    Ok(())
}
