use clap::Parser;
use std::path::PathBuf;

/// Arguments for generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create or refresh the instructions file:\n    aide generate\n\n\
                  Preview without writing:\n    aide generate --dry-run\n\n\
                  Use a custom template:\n    aide generate --template docs/agent-template.md")]
pub struct GenerateArgs {
    /// Show what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Template file to use instead of the configured or built-in one
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,
}
