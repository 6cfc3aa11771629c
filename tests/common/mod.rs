//! Common test utilities for nbfilter integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that change nbfilter's behaviour or log output
const NBFILTER_ENV: &[&str] = &[
    "NBFILTER_NOTEBOOK",
    "NBFILTER_DIR",
    "NBFILTER_PATTERN",
    "NBFILTER_COLAB_BASE",
    "RUST_LOG",
];

/// Command for the real nbfilter binary, isolated from the caller's environment
#[allow(deprecated)]
pub fn nbfilter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nbfilter").expect("nbfilter binary should be built");
    for var in NBFILTER_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// A project directory holding one notebook, e.g. `<tmp>/posts/intro.ipynb`
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Directory the notebook lives in
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with an empty notebook directory named `dir_name`
    pub fn new(dir_name: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join(dir_name);
        std::fs::create_dir_all(&path).expect("Failed to create notebook directory");
        Self { temp, path }
    }

    /// Write a file in the notebook directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

/// A minimal nbformat 4.5 notebook whose first cell holds `front_matter`
pub fn notebook_json(front_matter: &str) -> String {
    serde_json::json!({
        "cells": [
            {
                "cell_type": "raw",
                "id": "frontmtr",
                "metadata": {},
                "source": front_matter
            },
            {
                "cell_type": "code",
                "execution_count": 1,
                "id": "code0001",
                "metadata": {},
                "outputs": [
                    {"name": "stdout", "output_type": "stream", "text": ["2\n"]}
                ],
                "source": "print(1 + 1)"
            }
        ],
        "metadata": {
            "kernelspec": {"display_name": "Python 3", "language": "python", "name": "python3"}
        },
        "nbformat": 4,
        "nbformat_minor": 5
    })
    .to_string()
}

/// Parse command output as JSON
pub fn parse_output(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("Output should be valid JSON")
}

/// Cell sources of a parsed notebook, joined into strings
pub fn cell_sources(notebook: &serde_json::Value) -> Vec<String> {
    notebook["cells"]
        .as_array()
        .expect("cells should be an array")
        .iter()
        .map(|cell| match &cell["source"] {
            serde_json::Value::Array(lines) => lines
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<String>(),
            serde_json::Value::String(s) => s.clone(),
            _ => String::new(),
        })
        .collect()
}
