//! Deep copy of a source tree into the destination that gets rewritten.

use std::{
    fs,
    ops::AddAssign,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::walker::{issue_path, relative_path};
use crate::issues::Issue;

/// Statistics from duplicating a tree.
#[derive(Debug, Default)]
pub struct DuplicateStats {
    pub files_copied: usize,
    pub dirs_created: usize,
    pub issues: Vec<Issue>,
}

impl AddAssign for DuplicateStats {
    fn add_assign(&mut self, other: Self) {
        self.files_copied += other.files_copied;
        self.dirs_created += other.dirs_created;
        self.issues.extend(other.issues);
    }
}

/// Copy every file and directory of `src` into `dest`, creating `dest` if
/// needed.
///
/// Symlinks are followed; a link back to one of its own ancestors is
/// reported instead of copied. A directory that cannot be created skips its subtree; a
/// file that cannot be copied is skipped alone. Both become issues.
/// Directories are created in walk order, then files are copied in
/// parallel.
pub fn duplicate_tree(src: &Path, dest: &Path) -> DuplicateStats {
    let mut stats = DuplicateStats::default();
    let mut failed_dirs: Vec<PathBuf> = Vec::new();
    let mut files: Vec<(PathBuf, PathBuf, String)> = Vec::new();

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| issue_path(src, p))
                    .unwrap_or_else(|| src.display().to_string());
                stats.issues.push(Issue::list_dir(path, e));
                continue;
            }
        };

        let relative = relative_path(src, entry.path());
        if failed_dirs.iter().any(|dir| relative.starts_with(dir)) {
            continue;
        }
        let to = if relative.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(&relative)
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            match fs::create_dir_all(&to) {
                Ok(()) => stats.dirs_created += 1,
                Err(e) => {
                    stats.issues.push(Issue::copy_path(
                        issue_path(src, entry.path()),
                        to.display(),
                        e,
                    ));
                    failed_dirs.push(relative);
                }
            }
        } else if file_type.is_file() {
            let display_path = issue_path(src, entry.path());
            files.push((entry.into_path(), to, display_path));
        }
    }

    let copied: Vec<DuplicateStats> = files
        .par_iter()
        .map(|(from, to, display_path)| match fs::copy(from, to) {
            Ok(_) => DuplicateStats {
                files_copied: 1,
                ..Default::default()
            },
            Err(e) => DuplicateStats {
                issues: vec![Issue::copy_path(display_path, to.display(), e)],
                ..Default::default()
            },
        })
        .collect();
    for file in copied {
        stats += file;
    }

    stats
}
