use std::{collections::HashSet, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::cli::args::ScanCommand;
use crate::cli::exit_status::ExitStatus;
use crate::config::Config;
use crate::core::{FileFilter, collect_candidates};

/// List every sentence candidate under the source folder.
///
/// Nothing is prompted and nothing is written. The folder defaults to the
/// configured `sourceRoot`, then to the working directory.
pub fn scan(cmd: ScanCommand, config: &Config) -> Result<CommandResult> {
    let source = cmd
        .common
        .path
        .clone()
        .or_else(|| config.source_root.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    if !source.is_dir() {
        bail!("Invalid folder path: {}", source.display());
    }
    let root = source
        .canonicalize()
        .with_context(|| format!("Invalid folder path: {}", source.display()))?;

    let filter = FileFilter::new(&config.ignores, &config.extensions)?;
    let (candidates, stats) = collect_candidates(&root, &filter)?;

    let distinct_count = candidates
        .iter()
        .map(|c| c.literal.content.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            candidates,
            distinct_count,
            files_scanned: stats.files_scanned,
            binary_skipped: stats.binary_skipped,
        }),
        issues: stats.issues,
        exit_status: ExitStatus::Success,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::cli::args::CommonArgs;

    fn command(path: PathBuf) -> ScanCommand {
        ScanCommand {
            common: CommonArgs {
                path: Some(path),
                verbose: false,
            },
        }
    }

    #[test]
    fn test_scan_counts_distinct_candidates() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("a.lua"),
            "print(\"Hello world\")\nprint(\"Hello world\")\nx = \"ERR_001\"",
        )
        .unwrap();
        fs::write(dir.path().join("b.lua"), "notify('Welcome back!')").unwrap();

        let result = scan(command(dir.path().to_path_buf()), &Config::default()).unwrap();

        let CommandSummary::Scan(summary) = result.summary else {
            panic!("Expected scan summary");
        };
        assert_eq!(summary.candidates.len(), 3);
        assert_eq!(summary.distinct_count, 2);
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(result.exit_status, ExitStatus::Success);
    }

    #[test]
    fn test_scan_writes_nothing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.lua");
        fs::write(&file, "print(\"Hello world\")").unwrap();

        scan(command(dir.path().to_path_buf()), &Config::default()).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "print(\"Hello world\")");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_scan_rejects_missing_folder() {
        let dir = tempdir().unwrap();
        let result = scan(command(dir.path().join("missing")), &Config::default());
        assert!(result.is_err());
    }
}
