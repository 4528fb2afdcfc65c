use clap::Parser;

/// Arguments for status command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the instructions file state:\n    aide status\n\n\
                  Machine-readable output:\n    aide status --json\n\n\
                  Fail in CI when sections are missing:\n    aide status --check")]
pub struct StatusArgs {
    /// Print status as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if 'aide generate' would change the file
    #[arg(long)]
    pub check: bool,
}
