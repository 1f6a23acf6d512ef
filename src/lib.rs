//! Environment variable manager driven by a `.env.toml` file.
//!
//! Profiles are dotted paths into the TOML tree. `dotem load <profile>`
//! prints one line of `export` statements for the selected scalars and
//! `dotem unload <profile>` prints the matching `unset` statements; the shell
//! hook evaluates that line in the calling shell.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: discover, parse and resolve the `.env.toml` tree
//! - **[`shell`]**: validate names, quote values and emit shell statements
//! - **[`commands`]**: top-level subcommand orchestration
//! - **[`exec`]**: spawning the interactive editor
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod shell;
