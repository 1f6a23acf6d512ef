//! Command: print `export` statements for a profile.
use std::io::Write;

use anyhow::Result;

use crate::cli::ProfileOpts;
use crate::config::discovery::SearchRoots;
use crate::shell::emit;

/// Run the load command.
///
/// Writes a single line of `export KEY=VALUE` statements joined by `;`.
/// Nothing is written when resolution fails.
///
/// # Errors
///
/// Returns an error if the variables cannot be resolved or the output cannot
/// be written.
pub fn run(opts: &ProfileOpts, roots: &SearchRoots, out: &mut dyn Write) -> Result<()> {
    let vars = super::resolve_variables(opts, roots)?;
    writeln!(out, "{}", emit::exports(&vars))?;
    Ok(())
}
