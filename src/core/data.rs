use std::fmt;

/// Position of a literal inside the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    /// Path relative to the run root (e.g., "client/hud.lua").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_path, self.line)
    }
}

/// Delimiter style of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `"text"`
    Double,
    /// `'text'`
    Single,
}

impl Quote {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// A quoted string found in a source file.
///
/// `content` is the raw text between the delimiters. Escape sequences are
/// kept exactly as written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub content: String,
    pub quote: Quote,
    pub location: SourceLocation,
}

/// A literal that passed the sentence heuristic, with the line it sits on
/// for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub literal: Literal,
    pub source_line: String,
    /// Column of the opening delimiter (1-indexed, in characters).
    pub column: usize,
}

/// A literal the operator confirmed as translatable.
///
/// `location` is where the content was first approved; later occurrences
/// of the same text never produce another `ApprovedSentence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedSentence {
    pub content: String,
    pub location: SourceLocation,
}

impl From<Literal> for ApprovedSentence {
    fn from(literal: Literal) -> Self {
        Self {
            content: literal.content,
            location: literal.location,
        }
    }
}
