use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    aide completions bash > ~/.bash_completion.d/aide\n\n\
                  Generate zsh completions:\n    aide completions zsh > ~/.zfunc/_aide\n\n\
                  Generate fish completions:\n    aide completions fish > ~/.config/fish/completions/aide.fish\n\n\
                  Generate PowerShell completions:\n    aide completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
