mod args;
mod config_resolution;


pub use args::*;

use crate::commands::{run_plan, run_rename};
use crate::config;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const SUMMARY: &str = "Rename header files to a new extension and keep include directives in sync";

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let current_dir = std::env::current_dir()?;

    let config = config::load_config(&current_dir)?;

    match cli.command {
        Some(Commands::Rename(args)) => {
            let rename_config = args.target.with_config(&current_dir, config.as_ref())?;
            run_rename(&rename_config, args.yes)
        }
        Some(Commands::Plan(args)) => {
            let rename_config = args.target.with_config(&current_dir, config.as_ref())?;
            run_plan(&rename_config)
        }
        None => {
            // If no command is provided, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
