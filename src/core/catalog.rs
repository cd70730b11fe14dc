//! Indexed catalog of approved sentences and its Lua serialization.

use std::fmt::Write as _;

use super::data::ApprovedSentence;

/// Name of the lookup function emitted on the table.
pub const ACCESSOR_NAME: &str = "GetLang";

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 1-based, contiguous.
    pub index: usize,
    pub sentence: ApprovedSentence,
}

impl CatalogEntry {
    pub fn content(&self) -> &str {
        &self.sentence.content
    }

    /// The literal this entry replaces, exactly as it appears in sources.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.sentence.content)
    }
}

/// Approved sentences keyed by their position in first-seen order.
///
/// Immutable once built: the substitution pass and the emitted file both
/// read the same indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Assign index `i` to the i-th sentence. Input order is kept as is and
    /// no deduplication happens here.
    pub fn build(sentences: Vec<ApprovedSentence>) -> Self {
        let entries = sentences
            .into_iter()
            .enumerate()
            .map(|(i, sentence)| CatalogEntry {
                index: i + 1,
                sentence,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a Lua chunk defining `<table>.Lang` and the accessor.
    ///
    /// The accessor always reads `locale`; it is the single place to
    /// dispatch on a runtime locale later.
    pub fn render_lua(&self, table: &str, locale: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}.Lang = {{}}", table);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}.Lang[\"{}\"] = {{", table, locale);
        for entry in &self.entries {
            let _ = writeln!(out, "\t[{}] = \"{}\",", entry.index, entry.content());
        }
        let _ = writeln!(out, "}}");
        let _ = writeln!(out);
        let _ = writeln!(out, "function {}:{}(iIdx)", table, ACCESSOR_NAME);
        let _ = writeln!(out, "\treturn self.Lang[\"{}\"][iIdx]", locale);
        let _ = writeln!(out, "end");
        out
    }
}

/// Expression that replaces a literal in rewritten sources.
pub fn accessor_call(table: &str, index: usize) -> String {
    format!("{}:{}({})", table, ACCESSOR_NAME, index)
}
