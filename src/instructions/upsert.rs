//! Create or refresh an instructions file through a storage collaborator

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::markers::MarkerSyntax;
use super::merge::{MergeStatus, merge_with};
use crate::error::Result;
use crate::storage::FileStorage;

/// What the upsert did (or would do) to the target file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum UpsertOutcome {
    /// The file did not exist and was written from the template
    Created,
    /// Missing blocks were appended
    Updated { appended: Vec<String> },
    /// Every template block was already present
    UpToDate,
    /// The file has no markers and was left untouched
    Unmanaged,
}

impl UpsertOutcome {
    /// Whether the target file is (or would be) written
    pub fn writes(&self) -> bool {
        matches!(self, UpsertOutcome::Created | UpsertOutcome::Updated { .. })
    }
}

/// Upsert result for one target file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: UpsertOutcome,
}

/// Options for [`upsert_instructions`]
#[derive(Debug, Clone, Default)]
pub struct UpsertOptions {
    pub syntax: MarkerSyntax,
    /// Compute the outcome without writing anything
    pub dry_run: bool,
}

/// Create `target` from `template`, or append the template blocks it lacks.
///
/// The parent directory is created first. An existing file is rewritten only
/// when the merge changed it.
pub fn upsert_instructions(
    storage: &dyn FileStorage,
    target: &Path,
    template: &str,
    options: &UpsertOptions,
) -> Result<UpsertReport> {
    if !options.dry_run {
        if let Some(parent) = target.parent() {
            storage.create_dir(parent)?;
        }
    }

    let existing = if storage.exists(target) {
        Some(storage.read_to_string(target)?)
    } else {
        None
    };

    let merged = merge_with(existing.as_deref(), template, &options.syntax);

    if merged.changed && !options.dry_run {
        storage.write(target, merged.text.as_bytes())?;
    }

    let outcome = match merged.status {
        MergeStatus::Created => UpsertOutcome::Created,
        MergeStatus::Appended => UpsertOutcome::Updated {
            appended: merged.appended,
        },
        MergeStatus::UpToDate => UpsertOutcome::UpToDate,
        MergeStatus::Unmanaged => UpsertOutcome::Unmanaged,
    };

    Ok(UpsertReport {
        path: target.to_path_buf(),
        outcome,
    })
}

/// Report what [`upsert_instructions`] would do, without side effects
pub fn plan_instructions(
    storage: &dyn FileStorage,
    target: &Path,
    template: &str,
    syntax: &MarkerSyntax,
) -> Result<UpsertReport> {
    let options = UpsertOptions {
        syntax: syntax.clone(),
        dry_run: true,
    };
    upsert_instructions(storage, target, template, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::template::default_template;
    use crate::storage::MemoryStorage;

    const TARGET: &str = "/repo/.github/aide-instructions.md";

    #[test]
    fn test_creates_missing_file() {
        let storage = MemoryStorage::default();
        let report = upsert_instructions(
            &storage,
            Path::new(TARGET),
            default_template(),
            &UpsertOptions::default(),
        )
        .unwrap();

        assert_eq!(report.outcome, UpsertOutcome::Created);
        assert_eq!(storage.get(TARGET).as_deref(), Some(default_template()));
        assert!(storage.has_dir("/repo/.github"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_appends_missing_blocks() {
        let storage = MemoryStorage::default();
        storage.insert(
            TARGET,
            "<!-- AIDE:BEGIN Project overview -->\nMine\n<!-- AIDE:END Project overview -->\n",
        );

        let report = upsert_instructions(
            &storage,
            Path::new(TARGET),
            default_template(),
            &UpsertOptions::default(),
        )
        .unwrap();

        assert_eq!(
            report.outcome,
            UpsertOutcome::Updated {
                appended: vec!["Build & run".to_string(), "Coding conventions".to_string()]
            }
        );
        let content = storage.get(TARGET).unwrap();
        assert!(content.starts_with("<!-- AIDE:BEGIN Project overview -->\nMine\n"));
        assert!(content.contains("<!-- AIDE:END Coding conventions -->"));
    }

    #[test]
    fn test_unchanged_file_is_not_rewritten() {
        let storage = MemoryStorage::default();
        storage.insert(TARGET, default_template());

        let report = upsert_instructions(
            &storage,
            Path::new(TARGET),
            default_template(),
            &UpsertOptions::default(),
        )
        .unwrap();

        assert_eq!(report.outcome, UpsertOutcome::UpToDate);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_unmanaged_file_is_not_rewritten() {
        let storage = MemoryStorage::default();
        storage.insert(TARGET, "# Hand written\n");

        let report = upsert_instructions(
            &storage,
            Path::new(TARGET),
            default_template(),
            &UpsertOptions::default(),
        )
        .unwrap();

        assert_eq!(report.outcome, UpsertOutcome::Unmanaged);
        assert!(!report.outcome.writes());
        assert_eq!(storage.get(TARGET).as_deref(), Some("# Hand written\n"));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let storage = MemoryStorage::default();
        let report = plan_instructions(
            &storage,
            Path::new(TARGET),
            default_template(),
            &MarkerSyntax::default(),
        )
        .unwrap();

        assert_eq!(report.outcome, UpsertOutcome::Created);
        assert!(report.outcome.writes());
        assert!(!storage.exists(Path::new(TARGET)));
        assert!(!storage.has_dir("/repo/.github"));
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let storage = MemoryStorage::default();
        let options = UpsertOptions::default();
        let target = Path::new(TARGET);

        upsert_instructions(&storage, target, default_template(), &options).unwrap();
        let report = upsert_instructions(&storage, target, default_template(), &options).unwrap();

        assert_eq!(report.outcome, UpsertOutcome::UpToDate);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_report_serializes_outcome() {
        let report = UpsertReport {
            path: PathBuf::from("a.md"),
            outcome: UpsertOutcome::Updated {
                appended: vec!["Build & run".to_string()],
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "updated");
        assert_eq!(json["appended"][0], "Build & run");
        assert_eq!(json["path"], "a.md");
    }
}
