//! Status command: inspect the agent instructions file

use std::path::PathBuf;

use console::Style;
use serde::Serialize;

use crate::cli::StatusArgs;
use crate::error::{Result, template as template_error};
use crate::instructions::{
    TEMPLATE_VERSION, TemplateSource, UpsertOutcome, block_names, plan_instructions,
    template_version,
};
use crate::storage::{FileStorage, LocalStorage};
use crate::workspace::Workspace;

/// State of the instructions file relative to its template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionsStatus {
    pub path: String,
    pub exists: bool,
    /// File follows the marker convention
    pub managed: bool,
    pub template: String,
    /// Version stamped in the file, if any
    pub file_version: Option<u32>,
    pub builtin_version: u32,
    /// Blocks present in the file, in order
    pub blocks: Vec<String>,
    /// Template blocks that `aide generate` would add
    pub missing: Vec<String>,
    /// `aide generate` would leave the file as it is
    pub up_to_date: bool,
}

impl InstructionsStatus {
    /// Whether the built-in template is in effect
    pub fn uses_builtin_template(&self) -> bool {
        self.template == TemplateSource::Builtin.describe()
    }
}

/// Run status command
pub fn run(workspace: Option<PathBuf>, args: StatusArgs) -> Result<()> {
    let workspace = Workspace::open(workspace)?;
    let status = collect(&workspace, &LocalStorage)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        display(&status);
    }

    if args.check && !status.up_to_date {
        return Err(template_error::outdated(status.path));
    }
    Ok(())
}

/// Gather the status without modifying anything
pub(crate) fn collect(workspace: &Workspace, storage: &dyn FileStorage) -> Result<InstructionsStatus> {
    let target = workspace.instructions_path();
    let source = workspace.template_source(None);
    let template = source.load(storage)?;
    let syntax = workspace.markers();

    let existing = if storage.exists(&target) {
        Some(storage.read_to_string(&target)?)
    } else {
        None
    };

    let plan = plan_instructions(storage, &target, &template, syntax)?;
    let missing = match plan.outcome {
        UpsertOutcome::Created => block_names(&template, syntax),
        UpsertOutcome::Updated { appended } => appended,
        UpsertOutcome::UpToDate | UpsertOutcome::Unmanaged => Vec::new(),
    };

    let text = existing.as_deref().unwrap_or_default();
    Ok(InstructionsStatus {
        path: workspace.display_path(&target),
        exists: existing.is_some(),
        managed: syntax.is_managed(text),
        template: source.describe(),
        file_version: template_version(text),
        builtin_version: TEMPLATE_VERSION,
        blocks: block_names(text, syntax),
        up_to_date: missing.is_empty(),
        missing,
    })
}

fn display(status: &InstructionsStatus) {
    let label = Style::new().bold();
    let good = Style::new().green();
    let bad = Style::new().yellow();

    println!("{} {}", label.apply_to("Instructions:"), status.path);
    println!("{} {}", label.apply_to("Template:"), status.template);

    if !status.exists {
        println!("{} {}", label.apply_to("State:"), bad.apply_to("missing"));
    } else if !status.managed {
        println!(
            "{} {}",
            label.apply_to("State:"),
            bad.apply_to("unmanaged (no AIDE section markers)")
        );
    } else if status.up_to_date {
        println!("{} {}", label.apply_to("State:"), good.apply_to("up to date"));
    } else {
        println!("{} {}", label.apply_to("State:"), bad.apply_to("sections missing"));
    }

    if let Some(version) = status.file_version {
        if status.uses_builtin_template() && version < status.builtin_version {
            println!(
                "{} v{} (built-in template is v{})",
                label.apply_to("Version:"),
                version,
                status.builtin_version
            );
        } else {
            println!("{} v{}", label.apply_to("Version:"), version);
        }
    }

    if !status.blocks.is_empty() {
        println!("{}", label.apply_to("Sections:"));
        for name in &status.blocks {
            println!("  {} {}", good.apply_to("✔"), name);
        }
    }
    if !status.missing.is_empty() {
        println!("{}", label.apply_to("Missing:"));
        for name in &status.missing {
            println!("  {} {}", bad.apply_to("+"), name);
        }
    }
}
