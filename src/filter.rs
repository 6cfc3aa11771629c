//! The notebook transform: read front matter, optionally insert a title and
//! badge cell right after it.

use crate::badge::{self, BadgeOptions};
use crate::error::{NbFilterError, Result};
use crate::frontmatter;
use crate::notebook::{Cell, Notebook};

/// Index the title and badge cell is inserted at, right after the front matter
pub const BADGE_CELL_INDEX: usize = 1;

/// Apply the filter to a notebook.
///
/// The notebook file is only looked up on disk when the front matter asks for
/// a badge, so plain notebooks pass through without touching the filesystem.
pub fn apply(mut notebook: Notebook, options: &BadgeOptions) -> Result<Notebook> {
    let first = notebook
        .cells
        .first()
        .ok_or(NbFilterError::MissingMetadataCell)?;
    let front_matter = frontmatter::parse(&first.source)?;

    if !front_matter.insert_colab_badge {
        tracing::debug!("badge not requested, passing notebook through");
        return Ok(notebook);
    }

    let markdown = badge::render(&front_matter.title, options)?;
    notebook.insert_cell(BADGE_CELL_INDEX, Cell::markdown(markdown));
    tracing::info!(title = %front_matter.title, "inserted title and badge cell");
    Ok(notebook)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::notebook::{self, CellType};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn notebook_with(front_matter: &str) -> Notebook {
        let text = serde_json::json!({
            "cells": [
                {"cell_type": "raw", "metadata": {}, "source": front_matter},
                {"cell_type": "code", "execution_count": null, "metadata": {},
                 "outputs": [], "source": "x = 1"}
            ],
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 5
        })
        .to_string();
        notebook::read(&text).expect("fixture should parse")
    }

    fn project() -> (TempDir, PathBuf) {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let dir = temp.path().join("posts");
        std::fs::create_dir_all(&dir).expect("Failed to create posts directory");
        std::fs::write(dir.join("foo.ipynb"), "{}").expect("Failed to write notebook");
        (temp, dir)
    }

    #[test]
    fn test_passthrough_without_flag() {
        let nb = notebook_with("---\ntitle: Foo\n---");
        // The directory does not exist: no lookup happens without the flag.
        let options = BadgeOptions::new("/nonexistent/dir");
        let out = apply(nb.clone(), &options).expect("should pass through");
        assert_eq!(out, nb);
    }

    #[test]
    fn test_passthrough_with_false_flag() {
        let nb = notebook_with("---\ninsert_colab_badge: false\n---");
        let out = apply(nb.clone(), &BadgeOptions::new("/nonexistent/dir"))
            .expect("should pass through");
        assert_eq!(out.cells.len(), 2);
    }

    #[test]
    fn test_inserts_badge_cell() {
        let (_temp, dir) = project();
        let nb = notebook_with("---\ntitle: \"Foo\"\ninsert_colab_badge: true\n---");
        let out = apply(nb, &BadgeOptions::new(&dir)).expect("should insert badge");

        assert_eq!(out.cells.len(), 3);
        let cell = &out.cells[BADGE_CELL_INDEX];
        assert_eq!(cell.cell_type, CellType::Markdown);
        assert!(cell.source.starts_with("# Foo\n\n"));
        assert!(cell.source.contains("colab-badge.svg"));
        assert!(cell.source.contains("(https://colab.research.google.com/github/nateraw/naterawdotcom/blob/main/posts/foo.ipynb)"));
        assert!(cell.id.is_some());
        assert_eq!(out.cells[2].source, "x = 1");
    }

    #[test]
    fn test_default_title() {
        let (_temp, dir) = project();
        let nb = notebook_with("---\ninsert_colab_badge: true\n---");
        let out = apply(nb, &BadgeOptions::new(&dir)).expect("should insert badge");
        assert!(out.cells[1].source.starts_with("# Notebook Title\n"));
    }

    #[test]
    fn test_missing_notebook_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let nb = notebook_with("---\ninsert_colab_badge: true\n---");
        let err = apply(nb, &BadgeOptions::new(temp.path())).expect_err("should fail lookup");
        assert!(matches!(err, NbFilterError::NotebookFileNotFound { .. }));
    }

    #[test]
    fn test_malformed_front_matter() {
        let nb = notebook_with("---\ntitle: [oops\n---");
        let err = apply(nb, &BadgeOptions::new(".")).expect_err("should fail parse");
        assert!(matches!(err, NbFilterError::MetadataParseFailed { .. }));
    }

    #[test]
    fn test_empty_notebook() {
        let nb = Notebook {
            cells: Vec::new(),
            metadata: serde_json::Map::new(),
            nbformat: 4,
            nbformat_minor: 4,
        };
        let err = apply(nb, &BadgeOptions::new(".")).expect_err("should fail");
        assert!(matches!(err, NbFilterError::MissingMetadataCell));
    }
}
