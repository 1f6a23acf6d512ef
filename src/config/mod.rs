//! Loading and resolving the `.env.toml` configuration.

pub mod discovery;
pub mod profiles;
pub mod tree;

use std::path::{Path, PathBuf};

use crate::error::DotemError;
use crate::shell::{self, EnvironmentVariable};

pub use profiles::ProfilePath;
pub use tree::{ConfigTree, Node, Scalar, Table};

/// A loaded `.env.toml` file.
#[derive(Debug)]
pub struct Config {
    /// Where the file was read from.
    pub path: PathBuf,
    /// Parsed contents.
    pub tree: ConfigTree,
}

impl Config {
    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or not valid TOML.
    pub fn load(path: &Path) -> Result<Self, DotemError> {
        let tree = ConfigTree::load(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            tree,
        })
    }

    /// Resolve, validate and serialize the variables selected by `profile`.
    ///
    /// Either every selected variable is returned or none is: the first key
    /// that is not a valid shell identifier aborts the whole resolution.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::UnsupportedValue`] if the profile
    /// selects an array, and [`crate::error::ShellError::InvalidIdentifier`]
    /// for the first invalid key in resolution order.
    pub fn variables(&self, profile: &ProfilePath) -> Result<Vec<EnvironmentVariable>, DotemError> {
        let resolved = profiles::resolve(&self.tree, profile)?;
        Ok(shell::render(&resolved)?)
    }
}
