// Shared helpers for integration tests.
//
// Provides a temporary directory holding a `.env.toml` and a preconfigured
// `dotem` command running inside it, so each test is isolated from the
// user's real environment and config files.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Config with a global table, two groups and nested subgroups.
pub const GROUPS: &str = r#"
[global]
EDITOR_THEME = "dark"
LOG_LEVEL = "info"

[group-a]
A_ONE = 1
A_NAME = "alpha"

[group-b]
B_FLAG = true

[group-b.subgroup-1]
SUB_ONE = "first value"

[group-b.subgroup-2]
SUB_TWO = 2.5
"#;

/// An isolated working directory backed by a [`tempfile::TempDir`].
///
/// The config is written one level below the temp root so that discovery
/// never walks into a shared directory such as `/tmp`.
pub struct Workspace {
    root: tempfile::TempDir,
    cwd: PathBuf,
}

impl Workspace {
    /// Create a workspace without any config file.
    pub fn empty() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let cwd = root.path().join("project");
        std::fs::create_dir_all(&cwd).expect("create project dir");
        Self { root, cwd }
    }

    /// Create a workspace whose working directory contains `.env.toml`.
    pub fn with_config(content: &str) -> Self {
        let ws = Self::empty();
        ws.write(".env.toml", content);
        ws
    }

    /// Write `content` to `name` relative to the working directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.cwd.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// Working directory used for invocations.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// A directory outside the working tree, used as a fake `$HOME`.
    pub fn home(&self) -> PathBuf {
        let home = self.root.path().join("home");
        std::fs::create_dir_all(&home).expect("create home dir");
        home
    }

    /// `dotem` binary running in the working directory with a scrubbed
    /// environment.
    pub fn dotem(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotem");
        cmd.current_dir(&self.cwd)
            .env("HOME", self.home())
            .env_remove("USERPROFILE")
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("VISUAL")
            .env_remove("EDITOR")
            .env_remove("RUST_LOG");
        cmd
    }
}
