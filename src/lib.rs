//! Langsweep - interactive string extraction for Lua addons
//!
//! Langsweep walks a source tree, finds quoted literals that read like
//! human sentences, asks the operator which ones to translate, and then
//! writes a rewritten copy of the tree together with a Lua catalog that
//! maps each approved sentence to an index (`Table:GetLang(i)`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, prompts, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, sentence heuristic, confirmation session and the
//!   copy / catalog / rewrite pipeline
//! - `issues`: Recoverable problems and how they are reported

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
