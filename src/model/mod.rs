mod node;
mod taxonomy;

pub use node::{NodeKind, Placement, SkillEdge, SkillNode};
pub use taxonomy::{Category, Child, LeafGroup, Taxonomy};
