//! Locate the notebook on disk and build the title and badge markdown.

use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, fs as errors};
use crate::path_utils;

/// Base URL notebooks are opened from in Colab
pub const DEFAULT_COLAB_BASE: &str =
    "https://colab.research.google.com/github/nateraw/naterawdotcom/blob/main";

/// Pattern used to discover the notebook in the search directory
pub const DEFAULT_PATTERN: &str = "*.ipynb";

const BADGE_IMAGE: &str = "https://colab.research.google.com/assets/colab-badge.svg";

/// Where to find the notebook and how to link to it
#[derive(Debug, Clone)]
pub struct BadgeOptions {
    /// Explicit notebook path; skips discovery when set
    pub notebook: Option<PathBuf>,
    /// Directory scanned for a notebook file
    pub search_dir: PathBuf,
    /// Glob matched against file names in `search_dir`
    pub pattern: String,
    /// URL the relative notebook path is appended to
    pub colab_base: String,
}

impl BadgeOptions {
    /// Options that discover the notebook in `search_dir` with the defaults
    pub fn new(search_dir: impl Into<PathBuf>) -> Self {
        Self {
            notebook: None,
            search_dir: search_dir.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            colab_base: DEFAULT_COLAB_BASE.to_string(),
        }
    }
}

/// Find the notebook file the document on stdin was read from
pub fn locate_notebook(options: &BadgeOptions) -> Result<PathBuf> {
    if let Some(path) = &options.notebook {
        let path = if path.is_absolute() {
            path.clone()
        } else {
            options.search_dir.join(path)
        };
        return dunce::canonicalize(&path)
            .map_err(|_| errors::not_found(path.display().to_string()));
    }

    let glob = Glob::new(&options.pattern)
        .map_err(|e| errors::invalid_glob(&options.pattern, e.to_string()))?;
    let dir = dunce::canonicalize(&options.search_dir).map_err(|e| {
        errors::io_error(format!(
            "Failed to read directory {}: {e}",
            options.search_dir.display()
        ))
    })?;

    let mut matches = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if glob.matched(&CandidatePath::from(&*name)).is_some() {
            matches.push(entry.path());
        }
    }
    matches.sort();

    let mut matches = matches.into_iter();
    let first = matches
        .next()
        .ok_or_else(|| errors::notebook_not_found(dir.display().to_string(), &options.pattern))?;
    let others = matches.len();
    if others > 0 {
        tracing::warn!(
            dir = %dir.display(),
            chosen = %first.display(),
            others,
            "several files match the notebook pattern, using the first"
        );
    }
    Ok(first)
}

/// Link that opens the notebook in Colab
pub fn colab_link(base: &str, notebook_rel: &Path) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path_utils::to_forward_slashes(notebook_rel)
    )
}

/// Markdown image badge linking to `link`
pub fn colab_badge(link: &str) -> String {
    format!("[![Open In Colab]({BADGE_IMAGE})]({link})")
}

/// Heading plus badge, as inserted after the front-matter cell
pub fn title_and_badge(title: &str, link: &str) -> String {
    format!("# {title}\n\n{}", colab_badge(link))
}

/// Build the title and badge markdown for the notebook found via `options`
pub fn render(title: &str, options: &BadgeOptions) -> Result<String> {
    let notebook = locate_notebook(options)?;
    let rel = path_utils::relative_to_grandparent(&notebook);
    let link = colab_link(&options.colab_base, &rel);
    tracing::debug!(notebook = %notebook.display(), link = %link, "built colab link");
    Ok(title_and_badge(title, &link))
}
