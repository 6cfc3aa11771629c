//! Error types and handling for nbfilter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`notebook`]: Notebook document errors
//! - [`frontmatter`]: Front-matter metadata errors
//! - [`fs`]: File system and lookup errors

pub mod frontmatter;
pub mod fs;
pub mod notebook;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for nbfilter operations
#[derive(Error, Diagnostic, Debug)]
pub enum NbFilterError {
    // Notebook errors
    #[error("Failed to parse notebook: {reason}")]
    #[diagnostic(
        code(nbfilter::notebook::parse_failed),
        help("The input on stdin must be a notebook in nbformat v4 JSON")
    )]
    NotebookParseFailed { reason: String },

    #[error("Unsupported notebook format version {major}.{minor}")]
    #[diagnostic(
        code(nbfilter::notebook::unsupported_version),
        help("Only nbformat 4 notebooks are supported; upgrade with 'jupyter nbconvert --to notebook'")
    )]
    UnsupportedVersion { major: u64, minor: u64 },

    #[error("Failed to write notebook: {reason}")]
    #[diagnostic(code(nbfilter::notebook::write_failed))]
    NotebookWriteFailed { reason: String },

    #[error("Notebook has no cells to read front matter from")]
    #[diagnostic(
        code(nbfilter::notebook::missing_metadata_cell),
        help("The first cell must hold the front matter between '---' markers")
    )]
    MissingMetadataCell,

    // Front-matter errors
    #[error("Failed to parse front matter: {reason}")]
    #[diagnostic(
        code(nbfilter::frontmatter::parse_failed),
        help("The first cell must be YAML between '---' markers")
    )]
    MetadataParseFailed { reason: String },

    #[error("Front matter is not a key-value mapping (found {found})")]
    #[diagnostic(
        code(nbfilter::frontmatter::not_a_mapping),
        help("Write the first cell as 'key: value' lines, e.g. 'title: My Notebook'")
    )]
    MetadataNotMapping { found: String },

    // File system errors
    #[error("No file matching '{pattern}' found in {dir}")]
    #[diagnostic(
        code(nbfilter::fs::notebook_not_found),
        help("Run from the notebook's directory, or pass --notebook <PATH>")
    )]
    NotebookFileNotFound { dir: String, pattern: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(nbfilter::fs::invalid_glob))]
    InvalidGlob { pattern: String, reason: String },

    #[error("File not found: {path}")]
    #[diagnostic(code(nbfilter::fs::not_found))]
    FileNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(nbfilter::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for NbFilterError {
    fn from(err: std::io::Error) -> Self {
        NbFilterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NbFilterError {
    fn from(err: serde_json::Error) -> Self {
        notebook::parse_failed(err.to_string())
    }
}

impl From<serde_yaml::Error> for NbFilterError {
    fn from(err: serde_yaml::Error) -> Self {
        frontmatter::parse_failed(err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NbFilterError>;
