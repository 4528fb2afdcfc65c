//! Configuration errors

use super::AideError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl ToString) -> AideError {
    AideError::ConfigParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AideError {
    AideError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> AideError {
    AideError::ConfigReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
