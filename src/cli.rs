use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "Input/Skills.yml";

#[derive(Parser, Debug)]
#[command(name = "skilltree")]
#[command(about = "Render a YAML skill taxonomy as an interactive graph")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Skill file to render (used when no subcommand is given)
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub path: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the graph and write the HTML page (default behavior)
    Render(RenderArgs),

    /// Write a starter Skills.yml
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Skill file to render
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub path: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = crate::output::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Open the page in the default browser after writing it
    #[arg(long)]
    pub open: bool,

    /// Don't print the configuration and graph summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(crate::output::DEFAULT_OUTPUT_PATH),
            open: false,
            quiet: false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Directory to create Skills.yml in
    #[arg(default_value = "Input")]
    pub path: PathBuf,
}
