//! Command: print `unset` statements for a profile.
use std::io::Write;

use anyhow::Result;

use crate::cli::ProfileOpts;
use crate::config::discovery::SearchRoots;
use crate::shell::emit;

/// Run the unload command.
///
/// Selects exactly the keys `load` would export for the same options and
/// writes them as `unset KEY` statements joined by `;`.
///
/// # Errors
///
/// Returns an error if the variables cannot be resolved or the output cannot
/// be written.
pub fn run(opts: &ProfileOpts, roots: &SearchRoots, out: &mut dyn Write) -> Result<()> {
    let vars = super::resolve_variables(opts, roots)?;
    writeln!(out, "{}", emit::unsets(&vars))?;
    Ok(())
}
