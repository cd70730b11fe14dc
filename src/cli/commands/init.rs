use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::cli::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into `dir`. Refuses to overwrite.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary { created: false }),
            issues: Vec::new(),
            exit_status: ExitStatus::Failure,
        });
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created: true }),
        issues: Vec::new(),
        exit_status: ExitStatus::Success,
    })
}
