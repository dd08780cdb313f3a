//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Default notebook file extension (without the dot)
pub const DEFAULT_EXTENSION: &str = "ipynb";

/// nbmeta - notebook front-matter metadata sync
///
/// Copies YAML front matter from the first raw cell of each notebook into the
/// notebook's metadata.
#[derive(Parser, Debug)]
#[command(
    name = "nbmeta",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sync notebook metadata from YAML front matter in the first raw cell",
    long_about = "nbmeta reads each notebook, looks for a `---` delimited YAML block at the top of \
                  its first raw cell, and merges the parsed mapping into the notebook's metadata. \
                  Files that do not end in the notebook extension are ignored, so it can be run \
                  as a pre-commit hook over any set of staged files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  nbmeta analysis.ipynb                 \x1b[90m# Sync one notebook\x1b[0m\n   \
                  nbmeta notebooks/*.ipynb README.md    \x1b[90m# Non-notebooks are skipped\x1b[0m\n   \
                  nbmeta --completions zsh              \x1b[90m# Print zsh completions\x1b[0m\n"
)]
pub struct Cli {
    /// Files to process (non-notebook paths are ignored)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Notebook file extension to process
    #[arg(
        long,
        value_name = "EXT",
        env = "NBMETA_EXTENSION",
        default_value = DEFAULT_EXTENSION
    )]
    pub extension: String,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Suffix a path must end with to be processed, e.g. `.ipynb`
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}
