//! Template and instructions file errors

use super::AideError;

/// Creates a template not found error
pub fn not_found(path: impl Into<String>) -> AideError {
    AideError::TemplateNotFound { path: path.into() }
}

/// Creates an outdated instructions error
pub fn outdated(path: impl Into<String>) -> AideError {
    AideError::InstructionsOutdated { path: path.into() }
}

/// Wraps a failure of the generate operation
pub fn generate_failed(source: AideError) -> AideError {
    AideError::GenerateFailed {
        source: Box::new(source),
    }
}
