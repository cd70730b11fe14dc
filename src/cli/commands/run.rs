//! `langsweep run`: the full extraction → confirmation → substitution pass.
//!
//! Every option is resolved and validated before anything is written, so
//! invalid input never leaves a partial destination tree or catalog behind.

use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::{Path, PathBuf},
    thread,
};

use anyhow::{Context, Result, anyhow, bail};

use super::{CommandResult, CommandSummary, RunSummary};
use crate::cli::args::RunCommand;
use crate::cli::exit_status::ExitStatus;
use crate::cli::prompt::{LineConfirm, TerminalConfirm, ask_line};
use crate::config::{Config, validate_locale, validate_table_name};
use crate::core::{
    AskedSet, Catalog, Confirm, FileFilter, collect_sentences, duplicate_tree, substitute,
};

const TABLE_QUESTION: &str = "Please enter the name of the table (XXX.Lang) to use:";
const PATH_QUESTION: &str = "Please enter the folder path to fetch sentences from:";

/// Fully resolved and validated inputs of a run.
#[derive(Debug)]
pub struct RunOptions {
    pub table: String,
    /// Canonical source folder.
    pub source_root: PathBuf,
    pub output_dir: PathBuf,
    pub catalog_file: PathBuf,
    pub locale: String,
    pub filter: FileFilter,
}

impl RunOptions {
    /// Merge flags over config values, asking on `input` for whatever is
    /// still missing, then validate everything.
    pub fn resolve<R: BufRead, W: Write>(
        cmd: &RunCommand,
        config: &Config,
        input: &mut R,
        out: &mut W,
    ) -> Result<Self> {
        let table = match cmd.table.as_ref().or(config.table.as_ref()) {
            Some(table) => table.clone(),
            None => ask_line(input, out, TABLE_QUESTION)?,
        };
        validate_table_name(&table)?;

        let source = match cmd.common.path.clone() {
            Some(path) => path,
            None => match &config.source_root {
                Some(root) => PathBuf::from(root),
                None => PathBuf::from(ask_line(input, out, PATH_QUESTION)?),
            },
        };
        let source_root = validate_source_root(&source)?;

        let locale = cmd.locale.clone().unwrap_or_else(|| config.locale.clone());
        validate_locale(&locale)?;

        let output = cmd
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_dir));
        let output_dir = validate_output_dir(&source_root, &output, cmd.force)?;

        let catalog = cmd
            .catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.catalog_file));
        let catalog_file = validate_catalog_file(&source_root, &catalog)?;

        let filter = FileFilter::new(&config.ignores, &config.extensions)?;

        Ok(Self {
            table,
            source_root,
            output_dir,
            catalog_file,
            locale,
            filter,
        })
    }
}

/// Absolute form of `path` with symlinks resolved as far as the path exists.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Cannot resolve path: {}", path.display()))?;

    for ancestor in absolute.ancestors() {
        if ancestor.exists() {
            let canonical = ancestor
                .canonicalize()
                .with_context(|| format!("Cannot resolve path: {}", ancestor.display()))?;
            return Ok(match absolute.strip_prefix(ancestor) {
                Ok(rest) if !rest.as_os_str().is_empty() => canonical.join(rest),
                _ => canonical,
            });
        }
    }
    Ok(absolute)
}

fn validate_source_root(source: &Path) -> Result<PathBuf> {
    if source.as_os_str().is_empty() || !source.is_dir() {
        bail!("Invalid folder path: {}", source.display());
    }
    source
        .canonicalize()
        .with_context(|| format!("Invalid folder path: {}", source.display()))
}

fn validate_output_dir(source_root: &Path, output: &Path, force: bool) -> Result<PathBuf> {
    let output_dir = resolve_path(output)?;

    if output_dir.starts_with(source_root) {
        bail!(
            "Output directory {} must not be inside the source folder {}",
            output.display(),
            source_root.display()
        );
    }
    if source_root.starts_with(&output_dir) {
        bail!(
            "Output directory {} must not contain the source folder {}",
            output.display(),
            source_root.display()
        );
    }

    if output_dir.exists() {
        if !output_dir.is_dir() {
            bail!("Output path {} is not a directory", output.display());
        }
        let not_empty = fs::read_dir(&output_dir)
            .with_context(|| format!("Cannot read output directory: {}", output.display()))?
            .next()
            .is_some();
        if not_empty && !force {
            bail!(
                "Output directory {} is not empty (use --force to write into it)",
                output.display()
            );
        }
    }

    Ok(output_dir)
}

fn validate_catalog_file(source_root: &Path, catalog: &Path) -> Result<PathBuf> {
    let catalog_file = resolve_path(catalog)?;
    if catalog_file.starts_with(source_root) {
        bail!(
            "Catalog file {} must not be inside the source folder {}",
            catalog.display(),
            source_root.display()
        );
    }
    if catalog_file.is_dir() {
        bail!("Catalog path {} is a directory", catalog.display());
    }
    Ok(catalog_file)
}

/// Run the pipeline with an injected confirm capability.
///
/// The destination tree is copied on a scoped thread while the operator
/// answers prompts on this one. Substitution starts only once both the
/// walk and the copy are finished.
pub fn execute<C: Confirm>(options: &RunOptions, confirm: &mut C) -> Result<CommandResult> {
    let mut asked = AskedSet::new();

    let (collected, duplicated) = thread::scope(|s| {
        let copy = s.spawn(|| duplicate_tree(&options.source_root, &options.output_dir));
        let collected =
            collect_sentences(&options.source_root, &options.filter, &mut asked, confirm);
        (collected, copy.join())
    });
    let duplicated = duplicated.map_err(|_| anyhow!("Copying the source tree panicked"))?;
    let collected = collected?;

    let catalog = Catalog::build(collected.sentences);
    let substituted = substitute(&options.output_dir, &catalog, &options.table);

    if let Some(parent) = options.catalog_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(
        &options.catalog_file,
        catalog.render_lua(&options.table, &options.locale),
    )
    .with_context(|| format!("Failed to write catalog: {}", options.catalog_file.display()))?;

    let mut issues = collected.stats.issues;
    issues.extend(duplicated.issues);
    issues.extend(substituted.issues);

    Ok(CommandResult {
        summary: CommandSummary::Run(RunSummary {
            catalog,
            catalog_file: options.catalog_file.clone(),
            output_dir: options.output_dir.clone(),
            prompts: collected.prompts,
            files_scanned: collected.stats.files_scanned,
            files_copied: duplicated.files_copied,
            files_rewritten: substituted.files_rewritten,
            replacements: substituted.replacements,
            binary_skipped: collected.stats.binary_skipped + substituted.binary_skipped,
        }),
        issues,
        exit_status: ExitStatus::Success,
    })
}

/// Entry point wiring stdin/stdout to the pipeline.
pub fn run(cmd: RunCommand, config: &Config) -> Result<CommandResult> {
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    let options = RunOptions::resolve(&cmd, config, &mut input, &mut stdout)?;

    if cmd.common.verbose {
        eprintln!(
            "Note: scanning {}, writing to {}",
            options.source_root.display(),
            options.output_dir.display()
        );
    }

    if io::stdin().is_terminal() {
        drop(input);
        execute(&options, &mut TerminalConfirm::new(stdout))
    } else {
        execute(&options, &mut LineConfirm::new(input, stdout))
    }
}
