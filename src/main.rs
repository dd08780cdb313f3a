//! nbmeta - notebook front-matter metadata sync
//!
//! A pre-commit hook that copies the YAML front matter found in the first raw
//! cell of each notebook into the notebook's top-level metadata.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod frontmatter;
mod notebook;
mod sync;
mod ui;

use cli::Cli;
use ui::Reporter;

/// Environment variable overriding the log filter, e.g. `NBMETA_LOG=nbmeta=trace`
const LOG_ENV: &str = "NBMETA_LOG";

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("nbmeta={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell),
        None => {
            let reporter = Reporter::new(cli.quiet, cli.verbose);
            commands::sync::run(&cli.files, &cli.suffix(), &reporter).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
