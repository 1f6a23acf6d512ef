//! Locating the `.env.toml` file.
//!
//! When no explicit `--path` is given the file is searched for in, in order:
//! the current directory, its parent, the dotem config home
//! (`$XDG_CONFIG_HOME/dotem`, falling back to `~/.config/dotem`), and the
//! home directory. The first existing file wins.
//!
//! With `XDG_CONFIG_HOME` set, the file is looked up in
//! `$XDG_CONFIG_HOME/dotem`, never directly in `$XDG_CONFIG_HOME`.
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the configuration file.
pub const CONFIG_FILENAME: &str = ".env.toml";

/// Directories consulted during discovery.
///
/// Captured once from the process environment by [`SearchRoots::from_env`];
/// tests build it directly so they never touch the real environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    /// Working directory of the invocation.
    pub cwd: PathBuf,
    /// dotem config directory, if one could be determined.
    pub config_home: Option<PathBuf>,
    /// The user's home directory, if known.
    pub home: Option<PathBuf>,
}

impl SearchRoots {
    /// Capture the search roots from the current process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the working directory cannot be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .filter(|h| !h.is_empty())
            .map(PathBuf::from);
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|x| !x.is_empty())
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| h.join(".config")))
            .map(|base| base.join("dotem"));
        Ok(Self {
            cwd,
            config_home,
            home,
        })
    }

    /// Directories to search, in priority order.
    #[must_use]
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.cwd.clone()];
        if let Some(parent) = self.cwd.parent() {
            dirs.push(parent.to_path_buf());
        }
        dirs.extend(self.config_home.iter().cloned());
        dirs.extend(self.home.iter().cloned());
        dirs
    }
}

/// Find the first `.env.toml` in the search directories.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] listing the searched directories when no
/// file exists.
pub fn find(roots: &SearchRoots) -> Result<PathBuf, ConfigError> {
    let searched = roots.directories();
    for dir in &searched {
        let candidate = dir.join(CONFIG_FILENAME);
        tracing::debug!("looking for {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(ConfigError::NotFound { searched })
}

/// Use `explicit` when given, otherwise search for the file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `explicit` does not exist, or the
/// error from [`find`].
pub fn resolve_path(explicit: Option<&Path>, roots: &SearchRoots) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) if path.exists() => Ok(path.to_path_buf()),
        Some(path) => Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        }),
        None => find(roots).inspect_err(|err| {
            if let ConfigError::NotFound { searched } = err {
                let searched: Vec<_> = searched.iter().map(|d| d.display().to_string()).collect();
                tracing::debug!("no {CONFIG_FILENAME} in: {}", searched.join(", "));
            }
        }),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    /// A temp layout of `work/project` (cwd), `config` and `home`.
    struct Layout {
        _tmp: tempfile::TempDir,
        roots: SearchRoots,
    }

    impl Layout {
        fn new() -> Self {
            let tmp = tempfile::tempdir().unwrap();
            let cwd = tmp.path().join("work").join("project");
            let config_home = tmp.path().join("config").join("dotem");
            let home = tmp.path().join("home");
            for dir in [&cwd, &config_home, &home] {
                std::fs::create_dir_all(dir).unwrap();
            }
            Self {
                _tmp: tmp,
                roots: SearchRoots {
                    cwd,
                    config_home: Some(config_home),
                    home: Some(home),
                },
            }
        }

        fn place(&self, dir: &Path) -> PathBuf {
            let path = dir.join(CONFIG_FILENAME);
            std::fs::write(&path, "").unwrap();
            path
        }
    }

    #[test]
    fn directories_are_in_search_order() {
        let layout = Layout::new();
        let dirs = layout.roots.directories();
        assert_eq!(dirs.len(), 4);
        assert_eq!(dirs[0], layout.roots.cwd);
        assert_eq!(dirs[1], layout.roots.cwd.parent().unwrap());
        assert_eq!(Some(&dirs[2]), layout.roots.config_home.as_ref());
        assert_eq!(Some(&dirs[3]), layout.roots.home.as_ref());
    }

    #[test]
    fn cwd_wins_over_everything() {
        let layout = Layout::new();
        let expected = layout.place(&layout.roots.cwd);
        layout.place(layout.roots.cwd.parent().unwrap());
        layout.place(layout.roots.home.as_ref().unwrap());
        assert_eq!(find(&layout.roots).unwrap(), expected);
    }

    #[test]
    fn parent_is_searched_before_config_home() {
        let layout = Layout::new();
        let expected = layout.place(layout.roots.cwd.parent().unwrap());
        layout.place(layout.roots.config_home.as_ref().unwrap());
        assert_eq!(find(&layout.roots).unwrap(), expected);
    }

    #[test]
    fn config_home_is_searched_before_home() {
        let layout = Layout::new();
        let expected = layout.place(layout.roots.config_home.as_ref().unwrap());
        layout.place(layout.roots.home.as_ref().unwrap());
        assert_eq!(find(&layout.roots).unwrap(), expected);
    }

    #[test]
    fn falls_back_to_home() {
        let layout = Layout::new();
        let expected = layout.place(layout.roots.home.as_ref().unwrap());
        assert_eq!(find(&layout.roots).unwrap(), expected);
    }

    #[test]
    fn nothing_found_lists_searched_directories() {
        let layout = Layout::new();
        let err = find(&layout.roots).unwrap_err();
        assert!(
            matches!(err, ConfigError::NotFound { ref searched } if searched.len() == 4),
            "got {err:?}"
        );
    }

    #[test]
    fn explicit_path_is_used_verbatim() {
        let layout = Layout::new();
        layout.place(&layout.roots.cwd);
        let other = layout.roots.home.as_ref().unwrap().join("custom.toml");
        std::fs::write(&other, "").unwrap();
        assert_eq!(resolve_path(Some(&other), &layout.roots).unwrap(), other);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let layout = Layout::new();
        layout.place(&layout.roots.cwd);
        let missing = layout.roots.cwd.join("nope.toml");
        let err = resolve_path(Some(&missing), &layout.roots).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }), "got {err:?}");
    }
}
