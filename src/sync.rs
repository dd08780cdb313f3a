//! Synchronize notebook metadata from first-cell front matter.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{NbMetaError, Result};
use crate::frontmatter::{self, Entries};
use crate::notebook::{CellType, Notebook};

/// Why a notebook was left untouched without a parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoBlockReason {
    NoCells,
    FirstCellNotRaw(CellType),
    MissingMarkers,
    EmptyBlock,
}

impl fmt::Display for NoBlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoBlockReason::NoCells => f.write_str("notebook has no cells"),
            NoBlockReason::FirstCellNotRaw(cell_type) => {
                write!(f, "first cell is {cell_type}, not raw")
            }
            NoBlockReason::MissingMarkers => {
                f.write_str("first cell has no `---` delimited block")
            }
            NoBlockReason::EmptyBlock => f.write_str("front matter block is empty"),
        }
    }
}

/// Result of synchronizing one notebook
#[derive(Debug)]
pub enum SyncOutcome {
    /// Metadata merged and the file rewritten
    Updated { keys: Vec<String> },
    /// No usable block; the file was not written
    SkippedNoBlock { reason: NoBlockReason },
    /// A block was found but could not be decoded; the file was not written
    SkippedParseError { error: NbMetaError },
}

enum Skip {
    NoBlock(NoBlockReason),
    Parse(NbMetaError),
}

/// Merge front matter from the first raw cell of the notebook at `path` into
/// its metadata, rewriting the file when anything was merged.
///
/// Load and write failures are returned as errors. Decode failures are
/// reported as [`SyncOutcome::SkippedParseError`].
pub fn synchronize(path: &Path) -> Result<SyncOutcome> {
    let mut notebook = Notebook::load(path)?;

    let parsed = match front_matter(&notebook) {
        Ok(parsed) => parsed,
        Err(Skip::NoBlock(reason)) => {
            debug!(path = %path.display(), %reason, "no front matter");
            return Ok(SyncOutcome::SkippedNoBlock { reason });
        }
        Err(Skip::Parse(error)) => {
            debug!(path = %path.display(), %error, "front matter decode failed");
            return Ok(SyncOutcome::SkippedParseError { error });
        }
    };

    let keys = merge_metadata(&mut notebook.metadata, parsed);
    notebook.save(path)?;
    debug!(path = %path.display(), keys = ?keys, "metadata updated");

    Ok(SyncOutcome::Updated { keys })
}

/// Decoded, non-empty front matter of the notebook's first cell
fn front_matter(notebook: &Notebook) -> std::result::Result<Entries, Skip> {
    let cell = notebook
        .first_cell()
        .ok_or(Skip::NoBlock(NoBlockReason::NoCells))?;
    if !cell.is_raw() {
        return Err(Skip::NoBlock(NoBlockReason::FirstCellNotRaw(
            cell.cell_type,
        )));
    }

    let source = cell.source.text();
    let block = frontmatter::extract_block(&source)
        .ok_or(Skip::NoBlock(NoBlockReason::MissingMarkers))?;

    let parsed = frontmatter::parse_mapping(block).map_err(Skip::Parse)?;
    if parsed.is_empty() {
        return Err(Skip::NoBlock(NoBlockReason::EmptyBlock));
    }
    Ok(parsed)
}

/// Shallow merge: every parsed entry overwrites `metadata`. Returns the
/// merged keys in front-matter order, each once.
pub fn merge_metadata(metadata: &mut Map<String, Value>, parsed: Entries) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(parsed.len());
    for (key, value) in parsed {
        if !keys.contains(&key) {
            keys.push(key.clone());
        }
        metadata.insert(key, value);
    }
    keys
}
