//! Command: print the shell hook.
//!
//! Add `eval "$(dotem hook)"` to your shell rc file. The resulting `dotem`
//! function evaluates the output of `load` and `unload` in the current shell
//! and passes every other subcommand straight to the binary.
use std::io::Write;

use anyhow::Result;

/// POSIX shell function wrapping the `dotem` binary.
pub const HOOK_SCRIPT: &str = include_str!("hook.sh");

/// Write the hook script to `out`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(out: &mut dyn Write) -> Result<()> {
    out.write_all(HOOK_SCRIPT.as_bytes())?;
    Ok(())
}
