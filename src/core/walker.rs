//! Depth-first traversal of a source tree.
//!
//! Entries are visited in file-name order, files and directories
//! interleaved as listed, so a run over the same tree always prompts in the
//! same order. A directory that cannot be listed or a file that cannot be
//! read becomes an [`Issue`] and only that entry is skipped.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use super::{
    classifier::is_sentence,
    data::{ApprovedSentence, Candidate},
    scanner::{column_at, line_containing, scan},
    session::{AskedSet, Confirm, ConfirmationSession},
};
use crate::issues::Issue;

/// Decides which entries of a tree take part in the walk.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    ignores: Vec<Pattern>,
    extensions: Vec<String>,
}

impl FileFilter {
    /// Build a filter from glob patterns (matched against paths relative to
    /// the root) and file extensions. An empty extension list accepts every
    /// file.
    pub fn new(ignores: &[String], extensions: &[String]) -> Result<Self> {
        let ignores = ignores
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;
        let extensions = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        Ok(Self {
            ignores,
            extensions,
        })
    }

    pub fn is_ignored(&self, relative: &Path) -> bool {
        self.ignores.iter().any(|p| p.matches_path(relative))
    }

    pub fn accepts_file(&self, relative: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        relative
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e.to_ascii_lowercase()))
    }
}

/// Bookkeeping of a walk.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Text files handed to the visitor.
    pub files_scanned: usize,
    /// Files skipped because they are not valid UTF-8.
    pub binary_skipped: usize,
    pub issues: Vec<Issue>,
}

/// Path of `path` relative to `root`, for display and matching.
pub fn relative_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Path shown in issues: relative to `root`, or `root` itself for the root.
pub fn issue_path(root: &Path, path: &Path) -> String {
    let relative = relative_path(root, path);
    if relative.as_os_str().is_empty() {
        root.display().to_string()
    } else {
        relative.display().to_string()
    }
}

/// Visit every text file under `root` with its path relative to `root` and
/// its content. An error returned by `visit` stops the walk.
pub fn walk_sources<F>(root: &Path, filter: &FileFilter, mut visit: F) -> Result<WalkStats>
where
    F: FnMut(&str, &str) -> Result<()>,
{
    let mut stats = WalkStats::default();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !filter.is_ignored(&relative_path(root, e.path())));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| issue_path(root, p))
                    .unwrap_or_else(|| root.display().to_string());
                stats.issues.push(Issue::list_dir(path, e));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = relative_path(root, entry.path());
        if !filter.accepts_file(&relative) {
            continue;
        }
        let display_path = relative.display().to_string();

        let bytes = match fs::read(entry.path()) {
            Ok(b) => b,
            Err(e) => {
                stats.issues.push(Issue::read_file(&display_path, e));
                continue;
            }
        };
        let Ok(text) = String::from_utf8(bytes) else {
            stats.binary_skipped += 1;
            continue;
        };

        stats.files_scanned += 1;
        visit(&display_path, &text)?;
    }

    Ok(stats)
}

/// Sentence candidates of one file, in source order, repeats included.
pub fn file_candidates<'a>(
    file_path: &'a str,
    text: &'a str,
) -> impl Iterator<Item = Candidate> + 'a {
    scan(text)
        .filter(|span| is_sentence(span.content))
        .map(move |span| Candidate {
            source_line: line_containing(text, span.start).to_string(),
            column: column_at(text, span.start),
            literal: span.into_literal(file_path),
        })
}

/// Result of the interactive collection phase.
#[derive(Debug)]
pub struct Collected {
    /// Approved sentences in global first-seen order.
    pub sentences: Vec<ApprovedSentence>,
    /// Number of prompts put to the operator.
    pub prompts: usize,
    pub stats: WalkStats,
}

/// Walk `root`, ask the operator about every new candidate and return the
/// approved sentences.
///
/// `asked` is shared across every file, so a content string confirmed or
/// rejected in one file is never asked about again in another.
pub fn collect_sentences<C: Confirm>(
    root: &Path,
    filter: &FileFilter,
    asked: &mut AskedSet,
    confirm: &mut C,
) -> Result<Collected> {
    let mut session = ConfirmationSession::new(asked, confirm);
    let mut sentences = Vec::new();

    let stats = walk_sources(root, filter, |file_path, text| {
        let candidates = file_candidates(file_path, text)
            .map(|c| c.literal)
            .collect();
        sentences.extend(session.review(candidates)?);
        Ok(())
    })?;

    Ok(Collected {
        sentences,
        prompts: session.prompts(),
        stats,
    })
}

/// Walk `root` and return every candidate occurrence without prompting.
pub fn collect_candidates(root: &Path, filter: &FileFilter) -> Result<(Vec<Candidate>, WalkStats)> {
    let mut candidates = Vec::new();
    let stats = walk_sources(root, filter, |file_path, text| {
        candidates.extend(file_candidates(file_path, text));
        Ok(())
    })?;
    Ok((candidates, stats))
}
