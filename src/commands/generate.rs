//! Generate command: create or refresh the agent instructions file

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::config;
use crate::error::{Result, template as template_error};
use crate::instructions::{UpsertOptions, UpsertOutcome, UpsertReport, upsert_instructions};
use crate::storage::{FileStorage, LocalStorage};
use crate::ui::Reporter;
use crate::workspace::Workspace;

/// Run generate command
pub fn run(workspace: Option<PathBuf>, args: GenerateArgs, reporter: &dyn Reporter) -> Result<()> {
    let workspace = Workspace::open(workspace)?;
    generate(&workspace, &LocalStorage, &args, reporter)?;
    Ok(())
}

/// Upsert the instructions file of `workspace` and report the outcome
pub(crate) fn generate(
    workspace: &Workspace,
    storage: &dyn FileStorage,
    args: &GenerateArgs,
    reporter: &dyn Reporter,
) -> Result<UpsertReport> {
    let target = workspace.instructions_path();
    let source = workspace.template_source(args.template.as_deref());
    tracing::debug!(
        target = %target.display(),
        template = %source.describe(),
        dry_run = args.dry_run,
        "generating agent instructions"
    );

    let report = source
        .load(storage)
        .and_then(|template| {
            let options = UpsertOptions {
                syntax: workspace.markers().clone(),
                dry_run: args.dry_run,
            };
            upsert_instructions(storage, &target, &template, &options)
        })
        .map_err(|e| {
            tracing::error!(error = %e, "agent instructions upsert failed");
            template_error::generate_failed(e)
        })?;

    if !args.dry_run {
        match config::enable_instruction_files(&workspace.root) {
            Ok(true) => reporter.detail("Enabled use_instruction_files in .aide/config.yaml"),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "could not enable instruction files setting"),
        }
    }

    report_outcome(workspace, &report, args.dry_run, reporter);
    Ok(report)
}

fn report_outcome(
    workspace: &Workspace,
    report: &UpsertReport,
    dry_run: bool,
    reporter: &dyn Reporter,
) {
    let path = workspace.display_path(&report.path);

    if dry_run {
        match &report.outcome {
            UpsertOutcome::Created => reporter.info(&format!("Would create {path}")),
            UpsertOutcome::Updated { appended } => {
                reporter.info(&format!("Would add {} section(s) to {path}", appended.len()));
                report_appended(appended, reporter);
            }
            outcome => report_unchanged(outcome, &path, reporter),
        }
        return;
    }

    if report.outcome == UpsertOutcome::Created {
        reporter.success("Created agent instructions.");
        reporter.info(&format!("  {path}"));
        return;
    }

    // Anything other than a fresh file means the target was already there.
    reporter.success("Opened existing agent instructions.");
    reporter.info(&format!("  {path}"));
    match &report.outcome {
        UpsertOutcome::Updated { appended } => {
            reporter.info(&format!("Added {} section(s)", appended.len()));
            report_appended(appended, reporter);
        }
        outcome => report_unchanged(outcome, &path, reporter),
    }
}

fn report_appended(appended: &[String], reporter: &dyn Reporter) {
    for name in appended {
        reporter.info(&format!("  + {name}"));
    }
}

fn report_unchanged(outcome: &UpsertOutcome, path: &str, reporter: &dyn Reporter) {
    match outcome {
        UpsertOutcome::Unmanaged => {
            reporter.warn(&format!("{path} has no AIDE section markers; left unchanged"));
            reporter.detail("Delete the file and run 'aide generate' to start from the template");
        }
        _ => reporter.info(&format!("Agent instructions are up to date: {path}")),
    }
}
