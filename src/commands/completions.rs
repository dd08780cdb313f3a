//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::error::Result;

/// Generate shell completions for `shell` on stdout
pub fn run(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_completions(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "nbmeta", out);
}
