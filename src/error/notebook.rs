//! Notebook load and save errors

use std::path::Path;

use super::NbMetaError;

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Creates a notebook not found error
pub fn not_found(path: &Path) -> NbMetaError {
    NbMetaError::NotebookNotFound {
        path: display(path),
    }
}

/// Creates a notebook read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> NbMetaError {
    NbMetaError::NotebookReadFailed {
        path: display(path),
        reason: reason.to_string(),
    }
}

/// Creates a notebook parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> NbMetaError {
    NbMetaError::NotebookParseFailed {
        path: display(path),
        reason: reason.to_string(),
    }
}

/// Creates an unsupported notebook version error
pub fn unsupported_version(path: &Path, version: u64) -> NbMetaError {
    NbMetaError::UnsupportedNotebookVersion {
        path: display(path),
        version,
    }
}

/// Creates a notebook write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> NbMetaError {
    NbMetaError::NotebookWriteFailed {
        path: display(path),
        reason: reason.to_string(),
    }
}
