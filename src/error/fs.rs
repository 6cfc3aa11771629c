//! File system errors

use super::NbFilterError;

/// Creates a notebook file not found error for a directory scan
pub fn notebook_not_found(dir: impl Into<String>, pattern: impl Into<String>) -> NbFilterError {
    NbFilterError::NotebookFileNotFound {
        dir: dir.into(),
        pattern: pattern.into(),
    }
}

/// Creates an invalid glob error
pub fn invalid_glob(pattern: impl Into<String>, reason: impl Into<String>) -> NbFilterError {
    NbFilterError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> NbFilterError {
    NbFilterError::FileNotFound { path: path.into() }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> NbFilterError {
    NbFilterError::IoError {
        message: message.into(),
    }
}
