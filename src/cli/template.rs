use clap::Parser;

/// Arguments for template command
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Print the built-in template even if the workspace configures another one
    #[arg(long)]
    pub builtin: bool,
}
