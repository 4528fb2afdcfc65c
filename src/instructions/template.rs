//! Built-in agent instructions template and template sources

use std::path::{Path, PathBuf};

use crate::error::{Result, template as template_error};
use crate::storage::FileStorage;

/// Version stamped into the built-in template
pub const TEMPLATE_VERSION: u32 = 1;

const VERSION_PREFIX: &str = "<!-- AIDE:templateVersion=";
const VERSION_SUFFIX: &str = " -->";

const TEMPLATE_V1: &str = "\
# AIDE Agent Instructions
<!-- AIDE:templateVersion=1 -->

Use this file to tell AIDE how to work in this repository.
Keep it short, concrete, and actionable.

## Project overview
<!-- AIDE:BEGIN Project overview -->
- What this repo does
- Key folders/modules
<!-- AIDE:END Project overview -->

## Build & run
<!-- AIDE:BEGIN Build & run -->
- Install deps: `npm ci`
- Dev: `npm run watch`
- Test: `npm test`
<!-- AIDE:END Build & run -->

## Coding conventions
<!-- AIDE:BEGIN Coding conventions -->
- Prefer existing patterns in the codebase
- Keep changes minimal and consistent
- Avoid breaking UI; keep behavior backward compatible
- Add tests when behavior changes
<!-- AIDE:END Coding conventions -->
";

/// The current built-in template
pub fn default_template() -> &'static str {
    TEMPLATE_V1
}

/// Parse the embedded `templateVersion` comment, if any
pub fn template_version(text: &str) -> Option<u32> {
    let start = text.find(VERSION_PREFIX)? + VERSION_PREFIX.len();
    let len = text[start..].find(VERSION_SUFFIX)?;
    text[start..start + len].trim().parse().ok()
}

/// Where the template text comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl TemplateSource {
    /// Template from `path` when given, the built-in one otherwise
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => TemplateSource::File(path.to_path_buf()),
            None => TemplateSource::Builtin,
        }
    }

    /// Load the template text
    pub fn load(&self, storage: &dyn FileStorage) -> Result<String> {
        match self {
            TemplateSource::Builtin => Ok(default_template().to_string()),
            TemplateSource::File(path) => {
                if !storage.exists(path) {
                    return Err(template_error::not_found(path.display().to_string()));
                }
                storage.read_to_string(path)
            }
        }
    }

    /// Human-readable description
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Builtin => format!("built-in (v{TEMPLATE_VERSION})"),
            TemplateSource::File(path) => path.display().to_string(),
        }
    }
}
