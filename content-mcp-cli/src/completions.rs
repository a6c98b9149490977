use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Binary name completions are generated for
const BIN_NAME: &str = "content-mcp";

/// Write the completion script for `shell` to `out`
pub fn write_completion(shell: Shell, out: &mut dyn io::Write) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
    Ok(())
}

/// Print shell completion script to stdout
pub fn print_completion(shell: Shell) -> Result<()> {
    write_completion(shell, &mut io::stdout())
}
