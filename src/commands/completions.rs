//! Command: print a shell completion script.
use std::io::Write;

use anyhow::Result;
use clap::CommandFactory as _;

use crate::cli::{Cli, CompletionsOpts};

/// Generate the completion script for `opts.shell`.
///
/// # Errors
///
/// Returns an error if the output cannot be flushed.
pub fn run(opts: &CompletionsOpts, out: &mut dyn Write) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(opts.shell, &mut command, name, out);
    out.flush()?;
    Ok(())
}
