//! Operator confirmation of sentence candidates.
//!
//! The session turns heuristic candidates into approved sentences by asking
//! an injected [`Confirm`] capability. Every distinct content string is put
//! to the operator at most once per run: the [`AskedSet`] is owned by the
//! caller and threaded through every file of the walk.

use std::collections::HashSet;

use anyhow::Result;

use super::data::{ApprovedSentence, Literal};

/// What the operator is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmRequest<'a> {
    /// Path relative to the run root.
    pub file_path: &'a str,
    pub content: &'a str,
    /// Line number (1-indexed).
    pub line: usize,
}

impl<'a> From<&'a Literal> for ConfirmRequest<'a> {
    fn from(literal: &'a Literal) -> Self {
        Self {
            file_path: &literal.location.file_path,
            content: &literal.content,
            line: literal.location.line,
        }
    }
}

/// Capability that asks the operator whether a candidate is a sentence.
///
/// Implementations block until the operator answers. `Ok(true)` approves,
/// `Ok(false)` rejects. Errors are reserved for a broken input channel.
pub trait Confirm {
    fn confirm(&mut self, request: &ConfirmRequest<'_>) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&ConfirmRequest<'_>) -> Result<bool>,
{
    fn confirm(&mut self, request: &ConfirmRequest<'_>) -> Result<bool> {
        self(request)
    }
}

/// Content strings already put to the operator during this run.
#[derive(Debug, Default, Clone)]
pub struct AskedSet {
    asked: HashSet<String>,
}

impl AskedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, content: &str) -> bool {
        self.asked.contains(content)
    }

    /// Record `content` as asked. Returns false if it was already recorded.
    pub fn insert(&mut self, content: &str) -> bool {
        if self.asked.contains(content) {
            return false;
        }
        self.asked.insert(content.to_string())
    }

    pub fn len(&self) -> usize {
        self.asked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asked.is_empty()
    }
}

/// Drives confirmation over candidates, one prompt at a time.
pub struct ConfirmationSession<'a, C: Confirm> {
    asked: &'a mut AskedSet,
    confirm: &'a mut C,
    prompts: usize,
}

impl<'a, C: Confirm> ConfirmationSession<'a, C> {
    pub fn new(asked: &'a mut AskedSet, confirm: &'a mut C) -> Self {
        Self {
            asked,
            confirm,
            prompts: 0,
        }
    }

    /// Review the candidates of one file, in order.
    ///
    /// Content that was asked before (in this file or an earlier one) is
    /// skipped without consulting the operator again, whatever the earlier
    /// answer was.
    pub fn review(&mut self, candidates: Vec<Literal>) -> Result<Vec<ApprovedSentence>> {
        let mut approved = Vec::new();
        for literal in candidates {
            if !self.asked.insert(&literal.content) {
                continue;
            }
            self.prompts += 1;
            if self.confirm.confirm(&ConfirmRequest::from(&literal))? {
                approved.push(ApprovedSentence::from(literal));
            }
        }
        Ok(approved)
    }

    /// Number of prompts issued by this session.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}
