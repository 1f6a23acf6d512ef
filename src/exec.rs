//! Running external programs (the editor) with the terminal attached.
use std::process::Command;

use crate::error::ExecError;

/// Abstraction over process spawning so commands can be tested without
/// launching real programs.
#[cfg_attr(test, mockall::automock)]
pub trait Executor {
    /// Run `program` with `args`, inheriting stdio, and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started or exits non-zero.
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<(), ExecError>;
}

/// [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<(), ExecError> {
        tracing::debug!("running {program} {}", args.join(" "));
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(ExecError::Failed {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Split a command line such as `code --wait` into program and arguments,
/// using POSIX shell word rules.
///
/// # Errors
///
/// Returns [`ExecError::Unparseable`] for unbalanced quotes and
/// [`ExecError::EmptyCommand`] when there are no words.
pub fn split_command(command: &str) -> Result<(String, Vec<String>), ExecError> {
    let mut words = shlex::split(command)
        .ok_or_else(|| ExecError::Unparseable {
            command: command.to_string(),
        })?
        .into_iter();
    let program = words.next().ok_or(ExecError::EmptyCommand)?;
    Ok((program, words.collect()))
}
