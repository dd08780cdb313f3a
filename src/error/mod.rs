//! Error types and handling for nbmeta
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`notebook`]: Notebook load and save errors
//! - [`frontmatter`]: Front-matter decoding errors (recovered per file)

pub mod frontmatter;
pub mod notebook;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for nbmeta operations
#[derive(Error, Diagnostic, Debug)]
pub enum NbMetaError {
    // Notebook errors
    #[error("Notebook not found: {path}")]
    #[diagnostic(
        code(nbmeta::notebook::not_found),
        help("Check that the path passed to the hook exists")
    )]
    NotebookNotFound { path: String },

    #[error("Failed to read notebook: {path}: {reason}")]
    #[diagnostic(code(nbmeta::notebook::read_failed))]
    NotebookReadFailed { path: String, reason: String },

    #[error("Failed to parse notebook: {path}: {reason}")]
    #[diagnostic(
        code(nbmeta::notebook::parse_failed),
        help("The file must be a JSON notebook with `cells` and `nbformat` fields")
    )]
    NotebookParseFailed { path: String, reason: String },

    #[error("Unsupported notebook format version {version} in {path}")]
    #[diagnostic(
        code(nbmeta::notebook::unsupported_version),
        help("Only nbformat 4 notebooks are supported; upgrade the notebook with `jupyter nbconvert --to notebook`")
    )]
    UnsupportedNotebookVersion { path: String, version: u64 },

    #[error("Failed to write notebook: {path}: {reason}")]
    #[diagnostic(code(nbmeta::notebook::write_failed))]
    NotebookWriteFailed { path: String, reason: String },

    // Front-matter errors
    #[error("{reason}")]
    #[diagnostic(
        code(nbmeta::frontmatter::parse_failed),
        help("The block between the first two `---` markers must be valid YAML")
    )]
    FrontmatterParseFailed { reason: String },

    #[error("Front matter must be a mapping, found {found}")]
    #[diagnostic(code(nbmeta::frontmatter::not_mapping))]
    FrontmatterNotMapping { found: String },

    #[error("Unsupported front matter key: {key}")]
    #[diagnostic(
        code(nbmeta::frontmatter::invalid_key),
        help("Metadata keys must be plain scalars such as strings or numbers")
    )]
    FrontmatterInvalidKey { key: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(nbmeta::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for NbMetaError {
    fn from(err: std::io::Error) -> Self {
        NbMetaError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for NbMetaError {
    fn from(err: serde_yaml::Error) -> Self {
        frontmatter::parse_failed(err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NbMetaError>;
