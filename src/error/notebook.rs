//! Notebook document errors

use super::NbFilterError;

/// Creates a notebook parse failed error
pub fn parse_failed(reason: impl Into<String>) -> NbFilterError {
    NbFilterError::NotebookParseFailed {
        reason: reason.into(),
    }
}

/// Creates an unsupported version error
pub fn unsupported_version(major: u64, minor: u64) -> NbFilterError {
    NbFilterError::UnsupportedVersion { major, minor }
}

/// Creates a notebook write failed error
pub fn write_failed(reason: impl Into<String>) -> NbFilterError {
    NbFilterError::NotebookWriteFailed {
        reason: reason.into(),
    }
}
