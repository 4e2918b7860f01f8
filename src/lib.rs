pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fs;
pub mod graph;
pub mod model;
pub mod output;
pub mod render;
pub mod style;
pub mod summary;

pub use api::{SkillTree, SkillTreeError, run};
pub use cli::Cli;
pub use commands::{cmd_init, cmd_render};
pub use config::{NetworkConfig, SkillConfig};
pub use graph::SkillGraph;
