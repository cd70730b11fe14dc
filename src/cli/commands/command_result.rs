use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::{Candidate, Catalog};
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Run(RunSummary),
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct RunSummary {
    pub catalog: Catalog,
    pub catalog_file: PathBuf,
    pub output_dir: PathBuf,
    /// Number of prompts put to the operator.
    pub prompts: usize,
    pub files_scanned: usize,
    pub files_copied: usize,
    pub files_rewritten: usize,
    pub replacements: usize,
    /// Files skipped as non-UTF-8, during the walk and the rewrite.
    pub binary_skipped: usize,
}

#[derive(Debug)]
pub struct ScanSummary {
    pub candidates: Vec<Candidate>,
    pub distinct_count: usize,
    pub files_scanned: usize,
    pub binary_skipped: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a langsweep command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Recoverable problems met along the way (unreadable files, failed copies, ...).
    pub issues: Vec<Issue>,
    pub exit_status: ExitStatus,
}
