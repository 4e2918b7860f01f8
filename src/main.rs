use clap::Parser;
use skilltree::cli::{Cli, Command, RenderArgs};
use skilltree::{cmd_init, cmd_render};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Some(Command::Render(args)) => cmd_render(args),
        Some(Command::Init(args)) => cmd_init(args),
        None => {
            // A bare path renders with default options
            let args = RenderArgs {
                path: cli.path,
                ..Default::default()
            };
            cmd_render(args)
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "skilltree=debug"
    } else {
        "skilltree=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
