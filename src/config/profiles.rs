//! Profile selection and variable resolution.
//!
//! A profile is a dotted path into the configuration tree
//! (`group-b.subgroup-1`). Resolving a profile flattens the tree into the
//! ordered list of variables that are in scope for it:
//!
//! 1. scalars of the top-level `global` table, always;
//! 2. scalars at every level the path walks through, starting at the root;
//! 3. everything below the table the path ends on.
//!
//! Tables that do not match the next path segment are pruned. Keys are not
//! deduplicated: a key defined both globally and in a group is emitted twice
//! and the later definition wins when the shell evaluates the output.
use std::fmt;

use super::tree::{ConfigTree, Node, Scalar, Table};
use crate::error::ConfigError;

/// Profile loaded when none is given on the command line.
pub const DEFAULT_PROFILE: &str = "default";

/// Reserved top-level table whose variables are always in scope.
pub const GLOBAL_TABLE: &str = "global";

/// Which part of the configuration tree to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePath {
    /// Every variable in the file, ignoring group boundaries.
    All,
    /// A path of group names from the root.
    Segments(Vec<String>),
}

impl ProfilePath {
    /// Split a dotted profile name. An empty name selects everything.
    #[must_use]
    pub fn parse(profile: &str) -> Self {
        if profile.is_empty() {
            Self::All
        } else {
            Self::Segments(profile.split('.').map(str::to_string).collect())
        }
    }

    /// Build the path from command-line arguments; `all` overrides `profile`.
    #[must_use]
    pub fn from_args(profile: Option<&str>, all: bool) -> Self {
        if all {
            Self::All
        } else {
            Self::parse(profile.unwrap_or(DEFAULT_PROFILE))
        }
    }
}

impl fmt::Display for ProfilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("<all>"),
            Self::Segments(segments) => f.write_str(&segments.join(".")),
        }
    }
}

/// Walk state: either flatten everything or follow the remaining segments.
#[derive(Debug, Clone, Copy)]
enum Scope<'p> {
    All,
    Remaining(&'p [String]),
}

impl<'p> Scope<'p> {
    /// Scope for the child table `key`, or `None` if the child is pruned.
    fn descend(self, key: &str) -> Option<Self> {
        match self {
            Self::All => Some(Self::All),
            Self::Remaining([head, tail @ ..]) if head == key => Some(Self::from_segments(tail)),
            Self::Remaining(_) => None,
        }
    }

    const fn from_segments(segments: &'p [String]) -> Self {
        if segments.is_empty() {
            Self::All
        } else {
            Self::Remaining(segments)
        }
    }
}

/// Resolve the ordered `(key, value)` pairs in scope for `profile`.
///
/// Global variables come first, followed by the selected part of the tree in
/// depth-first document order. A profile that matches no group is not an
/// error; it simply contributes nothing beyond the globals and root scalars.
/// Arrays outside the selection are never looked at.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedValue`] for the first array in scope.
pub fn resolve<'t>(
    tree: &'t ConfigTree,
    profile: &ProfilePath,
) -> Result<Vec<(&'t str, &'t Scalar)>, ConfigError> {
    let root = tree.root();
    let mut out = Vec::new();

    let global = match root.get(GLOBAL_TABLE) {
        Some(Node::Table(global)) => Some(global),
        _ => None,
    };
    if let Some(global) = global {
        walk(global, Scope::All, None, &mut out)?;
    }

    let scope = match profile {
        ProfilePath::All => Scope::All,
        ProfilePath::Segments(segments) => Scope::from_segments(segments),
    };
    walk(root, scope, global.map(|_| GLOBAL_TABLE), &mut out)?;
    Ok(out)
}

fn walk<'t>(
    table: &'t Table,
    scope: Scope<'_>,
    skip: Option<&str>,
    out: &mut Vec<(&'t str, &'t Scalar)>,
) -> Result<(), ConfigError> {
    for (key, node) in table.iter() {
        if skip == Some(key) {
            continue;
        }
        match node {
            Node::Scalar(value) => out.push((key, value)),
            Node::Unsupported(dotted) => {
                return Err(ConfigError::UnsupportedValue {
                    key: dotted.clone(),
                });
            }
            Node::Table(child) => {
                if let Some(inner) = scope.descend(key) {
                    walk(child, inner, None, out)?;
                }
            }
        }
    }
    Ok(())
}
