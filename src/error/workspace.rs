//! Workspace errors

use super::AideError;

/// Creates a workspace not found error
pub fn not_found(path: impl Into<String>) -> AideError {
    AideError::WorkspaceNotFound { path: path.into() }
}
