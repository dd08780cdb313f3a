//! Sync command: run the synchronizer over the paths given on the command line

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::sync::{SyncOutcome, synchronize};
use crate::ui::Reporter;

/// Per-run counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub updated: usize,
    pub skipped: usize,
    pub failed_parse: usize,
}

impl SyncSummary {
    fn record(&mut self, outcome: &SyncOutcome) {
        match outcome {
            SyncOutcome::Updated { .. } => self.updated += 1,
            SyncOutcome::SkippedNoBlock { .. } => self.skipped += 1,
            SyncOutcome::SkippedParseError { .. } => self.failed_parse += 1,
        }
    }
}

/// Process `files` one after another. Paths not ending in `suffix` are
/// ignored. The first load or write failure stops the run.
pub fn run(files: &[PathBuf], suffix: &str, reporter: &Reporter) -> Result<SyncSummary> {
    let mut summary = SyncSummary::default();

    for path in files {
        if !has_suffix(path, suffix) {
            debug!(path = %path.display(), "not a notebook, ignoring");
            continue;
        }

        let outcome = synchronize(path)?;
        reporter.outcome(path, &outcome);
        summary.record(&outcome);
    }

    info!(
        updated = summary.updated,
        skipped = summary.skipped,
        failed_parse = summary.failed_parse,
        "sync finished"
    );
    Ok(summary)
}

/// Match on the file name as written, so `dir/.ipynb` counts too.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.to_string_lossy().ends_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NbMetaError;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn reporter() -> Reporter {
        Reporter::new(true, false)
    }

    fn write(dir: &TempDir, name: &str, first_cell: serde_json::Value) -> PathBuf {
        let path = dir.path().join(name);
        let nb = json!({
            "cells": [first_cell],
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 5
        });
        fs::write(&path, serde_json::to_string(&nb).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix(Path::new("a/b.ipynb"), ".ipynb"));
        assert!(has_suffix(Path::new(".ipynb"), ".ipynb"));
        assert!(!has_suffix(Path::new("a/b.ipynb.bak"), ".ipynb"));
        assert!(!has_suffix(Path::new("a/b.py"), ".ipynb"));
    }

    #[test]
    fn test_run_counts_outcomes() {
        let temp = TempDir::new().unwrap();
        let updated = write(
            &temp,
            "a.ipynb",
            json!({"cell_type": "raw", "metadata": {}, "source": "---\ntitle: A\n---"}),
        );
        let skipped = write(
            &temp,
            "b.ipynb",
            json!({"cell_type": "markdown", "metadata": {}, "source": "# B"}),
        );
        let broken = write(
            &temp,
            "c.ipynb",
            json!({"cell_type": "raw", "metadata": {}, "source": "---\nkey: [unclosed\n---"}),
        );

        let summary = run(&[updated, skipped, broken], ".ipynb", &reporter()).unwrap();
        assert_eq!(
            summary,
            SyncSummary {
                updated: 1,
                skipped: 1,
                failed_parse: 1
            }
        );
    }

    #[test]
    fn test_run_ignores_other_files() {
        let temp = TempDir::new().unwrap();
        // Would be a load failure if it were processed.
        let other = temp.path().join("notes.md");
        fs::write(&other, "---\ntitle: x\n---").unwrap();

        let summary = run(&[other], ".ipynb", &reporter()).unwrap();
        assert_eq!(summary, SyncSummary::default());
    }

    #[test]
    fn test_run_stops_on_load_failure() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.ipynb");
        let later = write(
            &temp,
            "later.ipynb",
            json!({"cell_type": "raw", "metadata": {}, "source": "---\ntitle: Later\n---"}),
        );
        let before = fs::read(&later).unwrap();

        let err = run(&[missing, later.clone()], ".ipynb", &reporter()).unwrap_err();
        assert!(matches!(err, NbMetaError::NotebookNotFound { .. }));
        assert_eq!(fs::read(&later).unwrap(), before);
    }
}
