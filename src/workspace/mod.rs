//! Workspace resolution
//!
//! The workspace root is, in order of preference:
//! 1. the directory given with `--workspace` (or `AIDE_WORKSPACE`)
//! 2. the work tree of the git repository enclosing the current directory
//! 3. the current directory

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::config::{self, AideConfig};
use crate::error::{Result, workspace as workspace_error};
use crate::instructions::{MarkerSyntax, TemplateSource};

/// A resolved workspace and its configuration
#[derive(Debug)]
pub struct Workspace {
    /// Root directory of the workspace
    pub root: PathBuf,

    /// Configuration from `.aide/config.yaml`
    pub config: AideConfig,
}

impl Workspace {
    /// Resolve the workspace root and load its configuration
    pub fn open(explicit: Option<PathBuf>) -> Result<Self> {
        let root = resolve_root(explicit)?;
        let config = config::load_config(&root)?;
        tracing::debug!(root = %root.display(), "opened workspace");
        Ok(Self { root, config })
    }

    /// Absolute path of the instructions file
    pub fn instructions_path(&self) -> PathBuf {
        self.config.instructions_path(&self.root)
    }

    /// Instructions path for display, relative to the root when possible
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Marker syntax in effect
    pub fn markers(&self) -> &MarkerSyntax {
        &self.config.instructions.markers
    }

    /// Template source; `override_path` wins over the configured template
    pub fn template_source(&self, override_path: Option<&Path>) -> TemplateSource {
        match override_path {
            Some(path) => TemplateSource::File(self.root.join(path)),
            None => TemplateSource::from_path(self.config.template_path(&self.root).as_deref()),
        }
    }
}

/// Resolve the workspace root directory
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            find_git_repository_root(&cwd).unwrap_or(cwd)
        }
    };

    if !root.is_dir() {
        return Err(workspace_error::not_found(root.display().to_string()));
    }

    Ok(normalize(&root))
}

/// Find the git work tree enclosing `start`
pub fn find_git_repository_root(start: &Path) -> Option<PathBuf> {
    let repo = git2::Repository::discover(start).ok()?;
    repo.workdir().map(normalize)
}

// Resolves symlinks such as macOS /var -> /private/var; falls back to the
// path as given when that fails.
fn normalize(path: &Path) -> PathBuf {
    path.normalize()
        .map(|p| p.into_path_buf())
        .unwrap_or_else(|_| path.to_path_buf())
}
