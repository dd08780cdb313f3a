//! User-facing status lines

use std::path::Path;

use console::Style;

use crate::error::NbMetaError;
use crate::sync::{NoBlockReason, SyncOutcome};

/// Prints one line per processed notebook
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Report the outcome for `path`. Parse errors go to stderr and are shown
    /// even in quiet mode.
    pub fn outcome(&self, path: &Path, outcome: &SyncOutcome) {
        match outcome {
            SyncOutcome::Updated { .. } | SyncOutcome::SkippedNoBlock { .. } if self.quiet => {}
            SyncOutcome::Updated { keys } => {
                println!("{}", updated_line(path, keys, self.verbose));
            }
            SyncOutcome::SkippedNoBlock { reason } => {
                println!("{}", no_block_line(path, *reason, self.verbose));
            }
            SyncOutcome::SkippedParseError { error } => {
                eprintln!("{}", parse_error_line(path, error));
            }
        }
    }
}

fn updated_line(path: &Path, keys: &[String], verbose: bool) -> String {
    let line = format!(
        "{} metadata in {}",
        Style::new().green().bold().apply_to("Updated"),
        path.display()
    );
    if verbose {
        format!("{line} ({})", keys.join(", "))
    } else {
        line
    }
}

fn no_block_line(path: &Path, reason: NoBlockReason, verbose: bool) -> String {
    let line = format!(
        "{} in {}",
        Style::new().dim().apply_to("No YAML metadata found"),
        path.display()
    );
    if verbose {
        format!("{line} ({reason})")
    } else {
        line
    }
}

fn parse_error_line(path: &Path, error: &NbMetaError) -> String {
    format!(
        "{} in {}: {}",
        Style::new().red().bold().apply_to("Error parsing YAML metadata"),
        path.display(),
        error
    )
}
