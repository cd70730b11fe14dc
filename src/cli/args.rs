//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `run`: Collect sentences interactively, rewrite a copy of the tree and
//!   emit the catalog
//! - `scan`: List sentence candidates without prompting or writing
//! - `init`: Initialize a langsweep configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Run(cmd)) => cmd.common.verbose,
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Folder to fetch sentences from (overrides config file)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct RunCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Table the catalog is attached to, as in <TABLE>.Lang (overrides config file)
    #[arg(long)]
    pub table: Option<String>,

    /// Directory receiving the rewritten copy of the tree (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// File the catalog is written to (overrides config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Locale key the accessor resolves against (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Write into the output directory even if it is not empty. Every file
    /// already in it is rewritten too, not only the copied ones
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Confirm sentences, rewrite a copy of the tree and write the catalog
    Run(RunCommand),
    /// List sentence candidates without prompting or writing anything
    Scan(ScanCommand),
    /// Initialize a new .langsweeprc.json configuration file
    Init,
}
