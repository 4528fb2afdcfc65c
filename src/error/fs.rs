//! File system errors

use super::AideError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> AideError {
    AideError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> AideError {
    AideError::FileReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl ToString) -> AideError {
    AideError::FileWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
