//! Workspace configuration (`.aide/config.yaml`)
//!
//! The file is optional; a missing file yields [`AideConfig::default`].
//!
//! ```yaml
//! use_instruction_files: true
//! instructions:
//!   path: .github/aide-instructions.md
//!   template: docs/agent-template.md
//!   markers:
//!     begin: "<!-- AIDE:BEGIN "
//!     end: "<!-- AIDE:END "
//!     close: " -->"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config as config_error, fs as fs_error};
use crate::instructions::MarkerSyntax;

/// Aide configuration directory, relative to the workspace root
pub const CONFIG_DIR: &str = ".aide";

/// Config filename inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Default instructions file, relative to the workspace root
pub const DEFAULT_INSTRUCTIONS_PATH: &str = ".github/aide-instructions.md";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AideConfig {
    /// Whether agents should pick up the instructions file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_instruction_files: Option<bool>,

    #[serde(default, skip_serializing_if = "InstructionsConfig::is_default")]
    pub instructions: InstructionsConfig,
}

/// Settings for the instructions file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstructionsConfig {
    /// Instructions file, relative to the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Custom template file, relative to the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "is_default_markers")]
    pub markers: MarkerSyntax,
}

fn is_default_markers(markers: &MarkerSyntax) -> bool {
    *markers == MarkerSyntax::default()
}

impl InstructionsConfig {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl AideConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        self.instructions.markers.validate()?;
        if let Some(path) = &self.instructions.path {
            if path.as_os_str().is_empty() {
                return Err(config_error::invalid("instructions.path must not be empty"));
            }
        }
        Ok(())
    }

    /// Absolute path of the instructions file under `root`
    pub fn instructions_path(&self, root: &Path) -> PathBuf {
        match &self.instructions.path {
            Some(path) => root.join(path),
            None => root.join(DEFAULT_INSTRUCTIONS_PATH),
        }
    }

    /// Absolute path of the configured template under `root`, if any
    pub fn template_path(&self, root: &Path) -> Option<PathBuf> {
        self.instructions.template.as_ref().map(|path| root.join(path))
    }
}

/// Path of the config file for a workspace root
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load_config(root: &Path) -> Result<AideConfig> {
    let path = config_path(root);

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AideConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| config_error::read_failed(path.display().to_string(), e))?;

    AideConfig::from_yaml(&content).map_err(|e| match e {
        crate::error::AideError::ConfigParseFailed { reason, .. } => {
            config_error::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    })
}

/// Save configuration to the workspace config file
pub fn save_config(root: &Path, config: &AideConfig) -> Result<()> {
    let path = config_path(root);
    let content = config.to_yaml()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| fs_error::write_failed(parent.display().to_string(), e))?;
    }

    fs::write(&path, content).map_err(|e| fs_error::write_failed(path.display().to_string(), e))
}

/// Turn on `use_instruction_files` in an existing config file.
///
/// Does nothing when the workspace has no config file or the setting is
/// already on. Returns whether the file was updated.
pub fn enable_instruction_files(root: &Path) -> Result<bool> {
    if !config_path(root).exists() {
        return Ok(false);
    }

    let mut config = load_config(root)?;
    if config.use_instruction_files == Some(true) {
        return Ok(false);
    }

    config.use_instruction_files = Some(true);
    save_config(root, &config)?;
    Ok(true)
}
