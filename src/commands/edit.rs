//! Command: open the configuration file in an editor.
use anyhow::{Context as _, Result};

use crate::cli::EditOpts;
use crate::config::discovery::{self, SearchRoots};
use crate::exec::{self, Executor};

/// Editor used when neither `--editor`, `$VISUAL` nor `$EDITOR` is set.
pub const FALLBACK_EDITOR: &str = "vi";

/// Pick the editor command: `--editor`, then `$VISUAL`, then `$EDITOR`.
///
/// `lookup` reads an environment variable; blank values are ignored.
#[must_use]
pub fn editor_command(explicit: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> String {
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(["VISUAL", "EDITOR"].into_iter().filter_map(&lookup))
        .find(|cmd| !cmd.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Run the edit command.
///
/// # Errors
///
/// Returns an error if no config file can be found, the editor command cannot
/// be parsed, or the editor fails.
pub fn run(opts: &EditOpts, roots: &SearchRoots, executor: &dyn Executor) -> Result<()> {
    let path = discovery::resolve_path(opts.path.as_deref(), roots)?;
    let command = editor_command(opts.editor.as_deref(), |name| std::env::var(name).ok());
    let (program, mut args) = exec::split_command(&command)?;
    args.push(path.display().to_string());

    tracing::debug!("editing {} with {program}", path.display());
    executor
        .run_interactive(&program, &args)
        .with_context(|| format!("editing {}", path.display()))
}
