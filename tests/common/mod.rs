//! Common test utilities for nbmeta integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding test notebooks
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Write an nbformat 4 notebook with the given cells and metadata
    pub fn write_notebook(&self, path: &str, cells: Value, metadata: Value) {
        let nb = json!({
            "cells": cells,
            "metadata": metadata,
            "nbformat": 4,
            "nbformat_minor": 5
        });
        self.write_file(
            path,
            &serde_json::to_string_pretty(&nb).expect("Failed to serialize notebook"),
        );
    }

    /// Parsed `metadata` of a notebook in workspace
    pub fn notebook_metadata(&self, path: &str) -> Value {
        let nb: Value =
            serde_json::from_str(&self.read_file(path)).expect("Failed to parse notebook");
        nb["metadata"].clone()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw cell with the given source
pub fn raw_cell(source: &str) -> Value {
    json!({"cell_type": "raw", "metadata": {}, "source": source})
}

/// Command for the nbmeta binary, run from `dir` with a clean environment
#[allow(deprecated)]
pub fn nbmeta_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("nbmeta").expect("Failed to find nbmeta binary");
    cmd.current_dir(dir);
    cmd.env_remove("NBMETA_EXTENSION");
    cmd.env_remove("NBMETA_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}
