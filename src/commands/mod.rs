//! Top-level subcommand orchestration.
//!
//! Each command writes its result to the supplied writer (stdout in the
//! binary) and reports diagnostics through [`tracing`] on stderr.

pub mod completions;
pub mod edit;
pub mod hook;
pub mod load;
pub mod unload;
pub mod version;

use anyhow::Result;

use crate::cli::ProfileOpts;
use crate::config::Config;
use crate::config::discovery::{self, SearchRoots};
use crate::shell::EnvironmentVariable;

/// Locate the config file, then resolve and render the variables selected
/// by `opts`.
///
/// # Errors
///
/// Returns an error if no config file can be found or read, if it is not
/// valid TOML, or if a selected key is not a valid shell identifier.
pub fn resolve_variables(
    opts: &ProfileOpts,
    roots: &SearchRoots,
) -> Result<Vec<EnvironmentVariable>> {
    let path = discovery::resolve_path(opts.path.as_deref(), roots)?;
    tracing::debug!("using {}", path.display());

    let config = Config::load(&path)?;
    let profile = opts.profile_path();
    let vars = config.variables(&profile)?;
    tracing::debug!("profile {profile}: {} variable(s)", vars.len());
    if vars.is_empty() {
        tracing::warn!("no variables selected by profile {profile}");
    }
    Ok(vars)
}
