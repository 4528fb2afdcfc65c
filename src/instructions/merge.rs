//! Idempotent merge of a template into an existing instructions file
//!
//! The merge only ever adds. Blocks the existing file already carries, including
//! any edits made between their markers, are left exactly as they are; blocks
//! present in the template but missing from the file are appended in template
//! order, each separated by a blank line.
//!
//! ```text
//! Existing:
//! <!-- AIDE:BEGIN Project overview -->
//! My notes
//! <!-- AIDE:END Project overview -->
//!
//! Result:
//! <!-- AIDE:BEGIN Project overview -->
//! My notes
//! <!-- AIDE:END Project overview -->
//!
//! <!-- AIDE:BEGIN Build & run -->
//! ...
//! <!-- AIDE:END Build & run -->
//!
//! <!-- AIDE:BEGIN Coding conventions -->
//! ...
//! <!-- AIDE:END Coding conventions -->
//! ```
//!
//! Files that carry no markers at all are never touched.

use serde::Serialize;

use super::blocks::extract_blocks;
use super::markers::MarkerSyntax;

/// How the merge treated the existing document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStatus {
    /// No existing document; the template is used as is
    Created,
    /// At least one missing block was appended
    Appended,
    /// Every template block is already present
    UpToDate,
    /// The document does not follow the marker convention and was left alone
    Unmanaged,
}

/// Result of merging a template into an existing document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Text that should be written back
    pub text: String,
    /// Whether `text` differs from the existing document
    pub changed: bool,
    pub status: MergeStatus,
    /// Names of appended blocks, in template order
    pub appended: Vec<String>,
}

impl MergeOutcome {
    /// Split into the merged text and the changed flag
    pub fn into_parts(self) -> (String, bool) {
        (self.text, self.changed)
    }
}

/// Merge `template` into `existing` using the default marker syntax
pub fn merge(existing: Option<&str>, template: &str) -> MergeOutcome {
    merge_with(existing, template, &MarkerSyntax::default())
}

/// Merge `template` into `existing` using `syntax` to find blocks.
///
/// `None` means the file does not exist yet; `Some("")` is an existing empty
/// file, which carries no markers and is therefore left alone.
pub fn merge_with(existing: Option<&str>, template: &str, syntax: &MarkerSyntax) -> MergeOutcome {
    let Some(existing) = existing else {
        return MergeOutcome {
            text: template.to_string(),
            changed: true,
            status: MergeStatus::Created,
            appended: Vec::new(),
        };
    };

    if !syntax.is_managed(existing) {
        return MergeOutcome {
            text: existing.to_string(),
            changed: false,
            status: MergeStatus::Unmanaged,
            appended: Vec::new(),
        };
    }

    let mut out = existing.to_string();
    let mut appended = Vec::new();

    for block in extract_blocks(template, syntax) {
        // Existing blocks win, even when their content differs from the template.
        if syntax.contains_block(&out, &block.name) {
            continue;
        }

        out.truncate(out.trim_end_matches(is_trailing_space).len());
        out.push_str("\n\n");
        out.push_str(&block.content);
        out.push('\n');
        appended.push(block.name);
    }

    let changed = out != existing;
    let status = if changed {
        MergeStatus::Appended
    } else {
        MergeStatus::UpToDate
    };

    MergeOutcome {
        text: out,
        changed,
        status,
        appended,
    }
}

/// Whitespace stripped before an append: Unicode white space except NEL
/// (U+0085), plus the byte order mark.
fn is_trailing_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}
