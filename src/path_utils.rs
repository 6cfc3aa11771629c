//! Cross-platform path utilities

use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes
///
/// Useful for building URLs from filesystem paths on any platform.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `file` relative to the parent of the directory containing it
///
/// `/work/posts/intro.ipynb` becomes `posts/intro.ipynb`. A file directly
/// under the filesystem root yields just its file name.
pub fn relative_to_grandparent(file: &Path) -> PathBuf {
    let anchor = file.parent().and_then(Path::parent);
    match anchor.and_then(|a| file.strip_prefix(a).ok()) {
        Some(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => file
            .file_name()
            .map_or_else(|| file.to_path_buf(), PathBuf::from),
    }
}
