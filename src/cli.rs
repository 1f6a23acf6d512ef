//! Command-line interface definition.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::version::VERSION;
use crate::config::profiles::{DEFAULT_PROFILE, ProfilePath};

/// Top-level CLI entry point for dotem.
#[derive(Parser, Debug)]
#[command(
    name = "dotem",
    about = "A tool for loading dotenv environment variables into your shell",
    version = VERSION
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the environment variables set in the profile
    Load(ProfileOpts),
    /// Unset the environment variables set in the profile
    Unload(ProfileOpts),
    /// Edit the `.env.toml` file in `$EDITOR`
    Edit(EditOpts),
    /// Print the shell function that evaluates `load`/`unload` output
    Hook,
    /// Print a shell completion script
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options shared by `load` and `unload`.
#[derive(Parser, Debug, Clone)]
pub struct ProfileOpts {
    /// Profile to select; nested groups are separated by dots
    #[arg(default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Path to the `.env.toml` file
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Select every variable in the file, ignoring the profile
    #[arg(long)]
    pub all: bool,
}

impl ProfileOpts {
    /// The part of the configuration tree these options select.
    #[must_use]
    pub fn profile_path(&self) -> ProfilePath {
        ProfilePath::from_args(Some(&self.profile), self.all)
    }
}

/// Options for the `edit` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct EditOpts {
    /// Path to the `.env.toml` file
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Editor command (defaults to `$VISUAL`, then `$EDITOR`, then `vi`)
    #[arg(long)]
    pub editor: Option<String>,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn profile_opts(args: &[&str]) -> ProfileOpts {
        let (Command::Load(opts) | Command::Unload(opts)) = Cli::parse_from(args.iter().copied()).command else {
            panic!("expected load or unload for {args:?}");
        };
        opts
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn load_defaults_to_default_profile() {
        let opts = profile_opts(&["dotem", "load"]);
        assert_eq!(opts.profile, "default");
        assert!(opts.path.is_none());
        assert!(!opts.all);
        assert_eq!(opts.profile_path(), ProfilePath::parse("default"));
    }

    #[test]
    fn load_with_dotted_profile() {
        let opts = profile_opts(&["dotem", "load", "group-b.subgroup-1"]);
        assert_eq!(opts.profile_path(), ProfilePath::parse("group-b.subgroup-1"));
    }

    #[test]
    fn load_with_path() {
        let opts = profile_opts(&["dotem", "load", "--path", "/tmp/.env.toml"]);
        assert_eq!(opts.path, Some(PathBuf::from("/tmp/.env.toml")));
    }

    #[test]
    fn unload_all_selects_everything() {
        let opts = profile_opts(&["dotem", "unload", "--all"]);
        assert!(opts.all);
        assert_eq!(opts.profile_path(), ProfilePath::All);
    }

    #[test]
    fn all_wins_over_explicit_profile() {
        let opts = profile_opts(&["dotem", "load", "dev", "--all"]);
        assert_eq!(opts.profile_path(), ProfilePath::All);
    }

    #[test]
    fn parse_edit_options() {
        let cli = Cli::parse_from(["dotem", "edit", "--editor", "code --wait"]);
        assert!(
            matches!(&cli.command, Command::Edit(opts) if opts.editor.as_deref() == Some("code --wait")),
            "unexpected command: {:?}",
            cli.command
        );
    }

    #[test]
    fn parse_hook() {
        let cli = Cli::parse_from(["dotem", "hook"]);
        assert!(matches!(cli.command, Command::Hook));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["dotem", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["dotem", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Command::Completions(CompletionsOpts {
                shell: clap_complete::Shell::Zsh
            })
        ));
    }

    #[test]
    fn parse_verbose_after_subcommand() {
        let cli = Cli::parse_from(["dotem", "load", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn version_flag_is_available() {
        let err = Cli::try_parse_from(["dotem", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
