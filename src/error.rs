//! Domain-specific error types for dotem.
//!
//! Internal modules return typed errors (e.g., [`ConfigError`], [`ShellError`])
//! while command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DotemError
//! ├── Config(ConfigError): discovery, reading and parsing `.env.toml`
//! └── Shell(ShellError):   variable names that cannot be exported
//!
//! ExecError                 launching the editor (used only by `edit`)
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for dotem.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum DotemError {
    /// Configuration-related error (discovery, I/O, parsing).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A resolved variable cannot be emitted as a shell command.
    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// Errors that arise from locating and parsing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No `.env.toml` was found in any of the search directories.
    #[error("Unable to find `.env.toml` file. Please specify `--path`")]
    NotFound {
        /// Directories that were searched, in order.
        searched: Vec<PathBuf>,
    },

    /// The file given with `--path` does not exist.
    #[error("Unable to find config file: {}", .path.display())]
    MissingFile {
        /// Path supplied by the user.
        path: PathBuf,
    },

    /// The file is not valid TOML.
    #[error("Unable to parse file {}: {message}", .path.display())]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Message from the TOML parser.
        message: String,
    },

    /// The file holds a value that has no environment variable representation.
    #[error("Unsupported value for key '{key}': arrays cannot be exported")]
    UnsupportedValue {
        /// Dotted path of the offending key.
        key: String,
    },

    /// An I/O error occurred while reading the config file.
    #[error("IO error reading config file {}: {source}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise when turning resolved variables into shell commands.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The key is not a valid POSIX shell identifier.
    #[error("Invalid environment variable: {key}")]
    InvalidIdentifier {
        /// The offending key, as written in the config file.
        key: String,
    },
}

/// Errors that arise from running external programs.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The command line was empty.
    #[error("No editor command given")]
    EmptyCommand,

    /// The command line could not be split into words (e.g. unbalanced quotes).
    #[error("Unable to parse command: {command}")]
    Unparseable {
        /// The raw command line.
        command: String,
    },

    /// The program could not be started.
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The program exited unsuccessfully.
    #[error("{program} exited with status {}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    Failed {
        /// Program that was launched.
        program: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    // -----------------------------------------------------------------------
    // ConfigError
    // -----------------------------------------------------------------------

    #[test]
    fn config_error_not_found_display() {
        let e = ConfigError::NotFound {
            searched: vec![PathBuf::from("/tmp")],
        };
        assert_eq!(
            e.to_string(),
            "Unable to find `.env.toml` file. Please specify `--path`"
        );
    }

    #[test]
    fn config_error_missing_file_display() {
        let e = ConfigError::MissingFile {
            path: PathBuf::from("/conf/.env.toml"),
        };
        assert_eq!(e.to_string(), "Unable to find config file: /conf/.env.toml");
    }

    #[test]
    fn config_error_parse_display() {
        let e = ConfigError::Parse {
            path: PathBuf::from(".env.toml"),
            message: "expected `=`".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Unable to parse file .env.toml: expected `=`"
        );
    }

    #[test]
    fn config_error_unsupported_value_display() {
        let e = ConfigError::UnsupportedValue {
            key: "dev.hosts".to_string(),
        };
        assert!(e.to_string().contains("'dev.hosts'"));
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: PathBuf::from("/conf/.env.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("/conf/.env.toml"));
    }

    // -----------------------------------------------------------------------
    // ShellError
    // -----------------------------------------------------------------------

    #[test]
    fn shell_error_invalid_identifier_names_key() {
        let e = ShellError::InvalidIdentifier {
            key: "hate-dandruff".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid environment variable: hate-dandruff");
    }

    // -----------------------------------------------------------------------
    // ExecError
    // -----------------------------------------------------------------------

    #[test]
    fn exec_error_failed_display() {
        let e = ExecError::Failed {
            program: "vim".to_string(),
            code: Some(2),
        };
        assert_eq!(e.to_string(), "vim exited with status 2");
    }

    #[test]
    fn exec_error_failed_without_code() {
        let e = ExecError::Failed {
            program: "vim".to_string(),
            code: None,
        };
        assert_eq!(e.to_string(), "vim exited with status unknown");
    }

    // -----------------------------------------------------------------------
    // DotemError conversions
    // -----------------------------------------------------------------------

    #[test]
    fn dotem_error_is_transparent_over_shell_error() {
        let e: DotemError = ShellError::InvalidIdentifier {
            key: "a-b".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "Invalid environment variable: a-b");
    }

    #[test]
    fn exec_error_converts_to_anyhow() {
        let e: anyhow::Error = ExecError::EmptyCommand.into();
        assert_eq!(e.to_string(), "No editor command given");
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<DotemError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<ShellError>();
        assert_send_sync::<ExecError>();
    }

    #[test]
    fn config_error_converts_to_anyhow() {
        let e = ConfigError::MissingFile {
            path: PathBuf::from("x"),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
