//! Recoverable problems found while walking, copying or rewriting trees.
//!
//! None of these abort a run. Each one names the path it concerns so the
//! operator can locate it, and the CLI reports them after the run.

use std::fmt;

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ListDir,
    ReadFile,
    CopyPath,
    WriteFile,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ListDir => write!(f, "list-dir"),
            Rule::ReadFile => write!(f, "read-file"),
            Rule::CopyPath => write!(f, "copy-path"),
            Rule::WriteFile => write!(f, "write-file"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A directory could not be listed; its subtree was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDirIssue {
    pub path: String,
    pub error: String,
}

/// A file could not be read; it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFileIssue {
    pub path: String,
    pub error: String,
}

/// A file or directory could not be copied to the destination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPathIssue {
    pub from: String,
    pub to: String,
    pub error: String,
}

/// A rewritten file could not be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFileIssue {
    pub path: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ListDir(ListDirIssue),
    ReadFile(ReadFileIssue),
    CopyPath(CopyPathIssue),
    WriteFile(WriteFileIssue),
}

impl Issue {
    pub fn list_dir(path: impl fmt::Display, error: impl fmt::Display) -> Self {
        Issue::ListDir(ListDirIssue {
            path: path.to_string(),
            error: error.to_string(),
        })
    }

    pub fn read_file(path: impl fmt::Display, error: impl fmt::Display) -> Self {
        Issue::ReadFile(ReadFileIssue {
            path: path.to_string(),
            error: error.to_string(),
        })
    }

    pub fn copy_path(
        from: impl fmt::Display,
        to: impl fmt::Display,
        error: impl fmt::Display,
    ) -> Self {
        Issue::CopyPath(CopyPathIssue {
            from: from.to_string(),
            to: to.to_string(),
            error: error.to_string(),
        })
    }

    pub fn write_file(path: impl fmt::Display, error: impl fmt::Display) -> Self {
        Issue::WriteFile(WriteFileIssue {
            path: path.to_string(),
            error: error.to_string(),
        })
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Path the issue concerns.
    fn path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule;
}

impl Report for ListDirIssue {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!("cannot list directory: {}", self.error)
    }

    fn report_rule(&self) -> Rule {
        Rule::ListDir
    }
}

impl Report for ReadFileIssue {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!("cannot read file: {}", self.error)
    }

    fn report_rule(&self) -> Rule {
        Rule::ReadFile
    }
}

impl Report for CopyPathIssue {
    fn path(&self) -> &str {
        &self.from
    }

    fn message(&self) -> String {
        format!("cannot copy to {}: {}", self.to, self.error)
    }

    fn report_rule(&self) -> Rule {
        Rule::CopyPath
    }
}

impl Report for WriteFileIssue {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!("cannot write file: {}", self.error)
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::WriteFile
    }
}
