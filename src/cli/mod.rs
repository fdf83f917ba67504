//! Command-line interface: argument parsing, command handlers, catalog
//! rewriting actions and report printing.

use std::process::ExitCode;

use anyhow::Result;

pub mod actions;
pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose)?;

    Ok(result.exit_status().into())
}
