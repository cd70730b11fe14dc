use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, load_config};

pub mod args;
pub mod commands;
mod exit_status;
pub mod prompt;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let cwd = env::current_dir().context("Failed to read the working directory")?;
    let loaded = load_config(&cwd)?;
    if verbose && !loaded.from_file {
        eprintln!(
            "{} no {} found, using defaults",
            "note:".bold().cyan(),
            CONFIG_FILE_NAME
        );
    }

    let result = run::run(args, &loaded.config, &cwd)?;
    report::print(&result, verbose);

    Ok(result.exit_status)
}
