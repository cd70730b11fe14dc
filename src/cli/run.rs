use std::path::Path;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, run::run as run_pipeline, scan::scan},
};
use crate::config::Config;

/// Dispatch a parsed command to its handler.
///
/// `cwd` is where `init` writes the config file.
pub fn run(Arguments { command }: Arguments, config: &Config, cwd: &Path) -> Result<CommandResult> {
    match command {
        Some(Command::Run(cmd)) => run_pipeline(cmd, config),
        Some(Command::Scan(cmd)) => scan(cmd, config),
        Some(Command::Init) => init(cwd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
