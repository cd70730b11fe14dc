//! Lexical scanner for quoted string literals.
//!
//! The scanner does not understand the grammar of the host language. It
//! looks for a `"` or `'`, then walks forward until the same delimiter
//! appears unescaped on the same line. A backslash always consumes the
//! next character, so `\"` and `\'` never close a literal.
//!
//! When no closing delimiter exists before the end of the line, the opening
//! quote is not a literal and scanning resumes right after it. This mirrors
//! how a backtracking regex engine would retry at the next position.

use super::data::{Literal, Quote, SourceLocation};

/// A literal occurrence borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan<'a> {
    /// Text between the delimiters.
    pub content: &'a str,
    pub quote: Quote,
    /// Line of the opening delimiter (1-indexed).
    pub line: usize,
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset one past the closing delimiter.
    pub end: usize,
}

impl LiteralSpan<'_> {
    /// The literal as written in the source, delimiters included.
    pub fn quoted<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }

    pub fn into_literal(self, file_path: impl Into<String>) -> Literal {
        Literal {
            content: self.content.to_string(),
            quote: self.quote,
            location: SourceLocation::new(file_path, self.line),
        }
    }
}

/// Lazily yields every string literal of `text` in source order.
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner {
        text,
        pos: 0,
        line: 1,
        counted_to: 0,
    }
}

pub struct Scanner<'a> {
    text: &'a str,
    /// Byte offset where the next search starts.
    pos: usize,
    /// Line number at `counted_to`.
    line: usize,
    counted_to: usize,
}

impl<'a> Scanner<'a> {
    /// Try to close a literal opened at `start`. Returns the end offset
    /// (exclusive) on success.
    fn close_at(&self, start: usize, quote: Quote) -> Option<usize> {
        let body = start + 1;
        let mut chars = self.text[body..].char_indices();
        while let Some((offset, c)) = chars.next() {
            if c == quote.as_char() {
                return Some(body + offset + 1);
            }
            match c {
                '\\' => match chars.next() {
                    Some((_, escaped)) if !is_line_terminator(escaped) => {}
                    _ => return None,
                },
                c if is_line_terminator(c) => return None,
                _ => {}
            }
        }
        None
    }

    fn line_at(&mut self, offset: usize) -> usize {
        // `counted_to` always sits on a quote, so a `\r\n` pair is never
        // split between two counted ranges.
        self.line += count_line_breaks(&self.text[self.counted_to..offset]);
        self.counted_to = offset;
        self.line
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = LiteralSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let found = rest.find(['"', '\''])?;
            let start = self.pos + found;
            let quote = Quote::from_char(char::from(self.text.as_bytes()[start]))?;

            match self.close_at(start, quote) {
                Some(end) => {
                    self.pos = end;
                    let line = self.line_at(start);
                    return Some(LiteralSpan {
                        content: &self.text[start + 1..end - 1],
                        quote,
                        line,
                        start,
                        end,
                    });
                }
                None => self.pos = start + 1,
            }
        }
        None
    }
}

/// Characters a literal may not span.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Count line breaks, treating `\r\n`, `\r` and `\n` as one break each.
pub fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\n' => count += 1,
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => count += 1,
            _ => {}
        }
    }
    count
}

/// Return the full line (without terminator) that contains `offset`.
pub fn line_containing(text: &str, offset: usize) -> &str {
    let start = line_start(text, offset);
    let end = text[offset..]
        .find(['\n', '\r'])
        .map(|i| offset + i)
        .unwrap_or(text.len());
    &text[start..end]
}

/// 1-based column (in characters) of `offset` within its line.
pub fn column_at(text: &str, offset: usize) -> usize {
    text[line_start(text, offset)..offset].chars().count() + 1
}

fn line_start(text: &str, offset: usize) -> usize {
    text[..offset]
        .rfind(['\n', '\r'])
        .map(|i| i + 1)
        .unwrap_or(0)
}
