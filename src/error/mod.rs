//! Error types and handling for Aide
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors
//! - [`workspace`]: Workspace errors
//! - [`template`]: Template and instructions errors

pub mod config;
pub mod fs;
pub mod template;
pub mod workspace;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Aide operations
#[derive(Error, Diagnostic, Debug)]
pub enum AideError {
    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(aide::workspace::not_found),
        help("Open a folder/workspace first, or pass --workspace <DIR>")
    )]
    WorkspaceNotFound { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(aide::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(aide::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(aide::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Template errors
    #[error("Template not found: {path}")]
    #[diagnostic(
        code(aide::template::not_found),
        help("Check the instructions.template path in .aide/config.yaml or --template")
    )]
    TemplateNotFound { path: String },

    #[error("Agent instructions are out of date: {path}")]
    #[diagnostic(
        code(aide::template::outdated),
        help("Run 'aide generate' to add the missing sections")
    )]
    InstructionsOutdated { path: String },

    #[error("Failed to generate agent instructions. {source}")]
    #[diagnostic(code(aide::template::generate_failed))]
    GenerateFailed {
        #[source]
        source: Box<AideError>,
    },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(aide::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(aide::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(aide::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(aide::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(aide::fs::io_error))]
    IoError { message: String },

    // Output errors
    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(aide::output::serialize_failed))]
    SerializationFailed { message: String },
}

impl From<std::io::Error> for AideError {
    fn from(err: std::io::Error) -> Self {
        AideError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AideError {
    fn from(err: serde_yaml::Error) -> Self {
        AideError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AideError {
    fn from(err: serde_json::Error) -> Self {
        AideError::SerializationFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AideError>;
