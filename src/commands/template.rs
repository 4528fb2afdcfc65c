//! Template command: print the effective instructions template

use std::io::Write;
use std::path::PathBuf;

use crate::cli::TemplateArgs;
use crate::error::Result;
use crate::instructions::default_template;
use crate::storage::LocalStorage;
use crate::workspace::Workspace;

/// Run template command
pub fn run(workspace: Option<PathBuf>, args: TemplateArgs) -> Result<()> {
    let text = if args.builtin {
        default_template().to_string()
    } else {
        let workspace = Workspace::open(workspace)?;
        workspace.template_source(None).load(&LocalStorage)?
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
