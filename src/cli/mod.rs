//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - status: Status command arguments
//! - template: Template command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;
pub mod status;
pub mod template;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use status::StatusArgs;
pub use template::TemplateArgs;

/// Aide - agent instructions for your repository
///
/// Seed and refresh the agent instructions file that tells AI coding agents how to work in a
/// repository.
#[derive(Parser, Debug)]
#[command(
    name = "aide",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Seed and refresh agent instructions for AI coding agents",
    long_about = "Aide maintains a marker-delimited agent instructions file \
                  (.github/aide-instructions.md). Sections you edit are never overwritten; \
                  sections missing from the file are added from the template.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  aide generate                 \x1b[90m# Create or refresh the instructions file\x1b[0m\n   \
                  aide generate --dry-run       \x1b[90m# Show what would change\x1b[0m\n   \
                  aide status --check           \x1b[90m# Fail if sections are missing\x1b[0m\n   \
                  aide template > template.md   \x1b[90m# Print the template\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to the enclosing git repository or current directory)
    #[arg(long, short = 'w', global = true, env = "AIDE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print nothing but errors and requested data
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the agent instructions file or add its missing sections
    Generate(GenerateArgs),

    /// Show the state of the agent instructions file
    Status(StatusArgs),

    /// Print the instructions template
    Template(TemplateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
