//! Rewrites approved literals into catalog lookups across a tree.
//!
//! Only the exact double-quoted form `"<content>"` is replaced, never the
//! bare content, so a sentence that is a substring of another literal is
//! left alone. Within a file, catalog entries are applied in index order
//! and every occurrence is rewritten. Files are independent of each other
//! and are processed in parallel.

use std::{fs, path::Path};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{
    catalog::{Catalog, accessor_call},
    walker::{issue_path, relative_path},
};
use crate::issues::Issue;

/// A single literal → accessor rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub quoted: String,
    pub call: String,
}

impl Replacement {
    /// One replacement per catalog entry, in catalog order.
    pub fn from_catalog(catalog: &Catalog, table: &str) -> Vec<Self> {
        catalog
            .entries()
            .iter()
            .map(|entry| Replacement {
                quoted: entry.quoted(),
                call: accessor_call(table, entry.index),
            })
            .collect()
    }
}

/// Outcome of the substitution pass.
#[derive(Debug, Default)]
pub struct SubstituteStats {
    pub files_visited: usize,
    pub files_rewritten: usize,
    pub replacements: usize,
    /// Files left untouched because they are not valid UTF-8.
    pub binary_skipped: usize,
    pub issues: Vec<Issue>,
}

enum FileOutcome {
    Unchanged,
    Rewritten(usize),
    Binary,
    Failed(Issue),
}

/// Apply `replacements` in order to `text`. Returns the new text and the
/// number of occurrences replaced.
pub fn rewrite_text(text: &str, replacements: &[Replacement]) -> (String, usize) {
    let mut current = text.to_string();
    let mut count = 0;
    for replacement in replacements {
        let found = current.matches(replacement.quoted.as_str()).count();
        if found > 0 {
            current = current.replace(replacement.quoted.as_str(), &replacement.call);
            count += found;
        }
    }
    (current, count)
}

/// Rewrite every file under `dest_root` against `catalog`.
///
/// Files without a match are not written. Listing, read and write failures
/// are collected as issues and the pass continues.
pub fn substitute(dest_root: &Path, catalog: &Catalog, table: &str) -> SubstituteStats {
    let mut stats = SubstituteStats::default();
    let mut files = Vec::new();

    for entry in WalkDir::new(dest_root).sort_by_file_name() {
        match entry {
            Ok(e) if e.file_type().is_file() => files.push(e.into_path()),
            Ok(_) => {}
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| issue_path(dest_root, p))
                    .unwrap_or_else(|| dest_root.display().to_string());
                stats.issues.push(Issue::list_dir(path, e));
            }
        }
    }

    if catalog.is_empty() {
        stats.files_visited = files.len();
        return stats;
    }

    let replacements = Replacement::from_catalog(catalog, table);

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| {
            let display_path = relative_path(dest_root, path).display().to_string();
            let bytes = match fs::read(path) {
                Ok(b) => b,
                Err(e) => return FileOutcome::Failed(Issue::read_file(display_path, e)),
            };
            let Ok(text) = String::from_utf8(bytes) else {
                return FileOutcome::Binary;
            };

            let (rewritten, count) = rewrite_text(&text, &replacements);
            if count == 0 {
                return FileOutcome::Unchanged;
            }
            match fs::write(path, rewritten) {
                Ok(()) => FileOutcome::Rewritten(count),
                Err(e) => FileOutcome::Failed(Issue::write_file(display_path, e)),
            }
        })
        .collect();

    stats.files_visited = files.len();
    for outcome in outcomes {
        match outcome {
            FileOutcome::Unchanged => {}
            FileOutcome::Rewritten(count) => {
                stats.files_rewritten += 1;
                stats.replacements += count;
            }
            FileOutcome::Binary => stats.binary_skipped += 1,
            FileOutcome::Failed(issue) => stats.issues.push(issue),
        }
    }

    stats
}
