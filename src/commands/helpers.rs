//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, fs as errors};

/// Resolve the notebook search directory from optional argument
///
/// If a directory is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_search_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| errors::io_error(format!("Failed to get current directory: {e}"))),
    }
}
