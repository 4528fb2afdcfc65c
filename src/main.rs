//! Aide - agent instructions manager
//!
//! Command line entry point: parses arguments, installs logging and dispatches
//! to the command implementations.

use clap::Parser;

use aide::cli::{Cli, Commands};
use aide::commands;
use aide::ui;

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reporter = ui::reporter(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.workspace, args, reporter.as_ref()),
        Commands::Status(args) => commands::status::run(cli.workspace, args),
        Commands::Template(args) => commands::template::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
