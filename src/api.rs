//! Library API for skilltree.
//!
//! `run` does what the command line does: load the skill file, build the
//! graph, render it and write the page. `SkillTree` exposes the steps
//! separately for callers that want the graph or the HTML without touching
//! disk.
//!
//! # Example
//!
//! ```no_run
//! use skilltree::{SkillTree, run};
//! use std::path::Path;
//!
//! let tree = run(Path::new("Input/Skills.yml"), Path::new("Output/skill_tree.html"))?;
//! println!("{}", tree);
//!
//! let tree = SkillTree::load(Path::new("Input/Skills.yml"))?;
//! let html = tree.render_html()?;
//! println!("{} bytes, {} nodes", html.len(), tree.graph().node_count());
//! # Ok::<(), skilltree::SkillTreeError>(())
//! ```

use crate::config::{ConfigError, SkillConfig};
use crate::fs::{FileSystem, default_fs};
use crate::graph::{BuildError, GraphData, SkillGraph, TreeBuilder, add_legend};
use crate::output::OutputWriter;
use crate::render::{NetworkOptions, RenderError, Renderer};
use crate::summary::Summary;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while turning a skill file into a page.
#[derive(Debug, Error)]
pub enum SkillTreeError {
    /// The skill file could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The taxonomy doesn't fit the configured size, colour or level tables.
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// The graph could not be serialized into the page.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The page could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A loaded skill file together with the graph built from it.
#[derive(Debug, Clone)]
pub struct SkillTree {
    config: SkillConfig,
    graph: SkillGraph,
}

impl SkillTree {
    /// Load a skill file from disk and build its graph.
    pub fn load(path: &Path) -> Result<Self, SkillTreeError> {
        Self::load_with_fs(path, default_fs())
    }

    pub fn load_with_fs(path: &Path, fs: &dyn FileSystem) -> Result<Self, SkillTreeError> {
        let config = SkillConfig::load_with_fs(path, fs)?;
        Ok(Self::from_config(config)?)
    }

    /// Build the graph: legend chain first (when enabled), then the taxonomy.
    pub fn from_config(config: SkillConfig) -> Result<Self, BuildError> {
        let mut graph = SkillGraph::new();

        if config.network.legends {
            add_legend(&config.network, &mut graph)?;
        }
        TreeBuilder::new(&config.network).build(&config.taxonomy, &mut graph)?;

        Ok(Self { config, graph })
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    pub fn graph(&self) -> &SkillGraph {
        &self.graph
    }

    pub fn graph_data(&self) -> GraphData {
        GraphData::from_graph(&self.graph)
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary::new(&self.config, &self.graph)
    }

    pub fn render_html(&self) -> Result<String, RenderError> {
        Renderer::new(NetworkOptions::from_config(&self.config.network)).render(&self.graph_data())
    }

    /// Render and write the page to `path`.
    pub fn save(&self, path: &Path) -> Result<(), SkillTreeError> {
        self.save_with_fs(path, default_fs())
    }

    pub fn save_with_fs(&self, path: &Path, fs: &dyn FileSystem) -> Result<(), SkillTreeError> {
        let html = self.render_html()?;

        let mut writer = OutputWriter::new(fs);
        if self.config.network.dedupe_heading {
            writer = writer.with_heading_dedupe(self.config.network.title.as_str());
        }
        writer.write(path, &html)?;
        Ok(())
    }
}

impl fmt::Display for SkillTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Load `input`, build the graph and write the page to `output`.
pub fn run(input: &Path, output: &Path) -> Result<SkillTree, SkillTreeError> {
    run_with_fs(input, output, default_fs())
}

pub fn run_with_fs(
    input: &Path,
    output: &Path,
    fs: &dyn FileSystem,
) -> Result<SkillTree, SkillTreeError> {
    let tree = SkillTree::load_with_fs(input, fs)?;
    tree.save_with_fs(output, fs)?;
    Ok(tree)
}
