//! Extraction, confirmation and substitution pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! source tree ── walker ──► scanner ──► classifier ──► session ──► approved sentences
//!                                                                       │
//!                                                                    catalog
//!                                                                       │
//! destination tree (duplicate) ─────────────────────────────────► substitute
//! ```
//!
//! ## Module Structure
//!
//! - `data`: Literal, Candidate, ApprovedSentence, SourceLocation
//! - `scanner`: quoted-literal scanner
//! - `classifier`: sentence heuristic
//! - `session`: operator confirmation with run-scoped dedup
//! - `walker`: tree traversal and per-file collection
//! - `catalog`: indexed catalog and Lua emission
//! - `substitute`: literal → accessor rewriting
//! - `duplicate`: destination tree copy

pub mod catalog;
pub mod classifier;
pub mod data;
pub mod duplicate;
pub mod scanner;
pub mod session;
pub mod substitute;
pub mod walker;

pub use catalog::{Catalog, CatalogEntry, accessor_call};
pub use classifier::is_sentence;
pub use data::{ApprovedSentence, Candidate, Literal, Quote, SourceLocation};
pub use duplicate::{DuplicateStats, duplicate_tree};
pub use scanner::{LiteralSpan, scan};
pub use session::{AskedSet, Confirm, ConfirmRequest, ConfirmationSession};
pub use substitute::{SubstituteStats, substitute};
pub use walker::{Collected, FileFilter, WalkStats, collect_candidates, collect_sentences};
