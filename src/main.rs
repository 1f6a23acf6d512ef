//! `dotem` command-line entry point.
use std::io::{self, Write as _};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dotem::cli::{Cli, Command};
use dotem::commands;
use dotem::config::discovery::SearchRoots;
use dotem::exec::SystemExecutor;
use dotem::logging;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr(), "Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Load(opts) => commands::load::run(&opts, &SearchRoots::from_env()?, &mut out),
        Command::Unload(opts) => commands::unload::run(&opts, &SearchRoots::from_env()?, &mut out),
        Command::Edit(opts) => {
            commands::edit::run(&opts, &SearchRoots::from_env()?, &SystemExecutor)
        }
        Command::Hook => commands::hook::run(&mut out),
        Command::Completions(opts) => commands::completions::run(&opts, &mut out),
        Command::Version => commands::version::run(&mut out),
    }
}
