//! Heuristic that decides whether a literal reads like user-facing prose.
//!
//! The filter favors precision: identifiers, keys, paths and format strings
//! are rejected outright, while anything that survives is put to the
//! operator. Short genuine sentences (a single word, or text with commas)
//! are rejected and never surface.

use std::sync::LazyLock;

use regex::Regex;

/// Format placeholder that is allowed inside sentences.
pub const PLACEHOLDER: &str = "%s";

/// Word substituted for [`PLACEHOLDER`] before tokenizing, so the
/// placeholder counts as a word.
const PLACEHOLDER_WORD: &str = "placeholder";

/// One trailing terminator that is tolerated at the end of a sentence.
const TERMINATORS: &[char] = &['.', '!', '?', ';'];

static SPECIAL_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[~`!@#$%^&*()\-_=+\[\]{};:"\\|,.<>/?]"#).unwrap());

static WORD_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_]+").unwrap());

/// Returns true if `content` looks like a sentence worth localizing.
///
/// Rejection rules, applied in order:
///
/// 1. the text equals its upper-cased form (`"SAVE_BUTTON"`, `"404"`, `""`);
/// 2. after dropping one trailing terminator and every `%s`, the text still
///    contains punctuation or symbols (`"ui/hud.lua"`, `"%d items"`);
/// 3. the text has fewer than two words.
///
/// # Examples
///
/// ```
/// use langsweep::core::is_sentence;
///
/// assert!(is_sentence("Hello world"));
/// assert!(is_sentence("Press %s to continue."));
/// assert!(!is_sentence("ERR_001"));
/// assert!(!is_sentence("config.lua"));
/// assert!(!is_sentence("Hello"));
/// ```
pub fn is_sentence(content: &str) -> bool {
    if content.to_uppercase() == content {
        return false;
    }

    if has_special_chars(content) {
        return false;
    }

    word_count(content) >= 2
}

fn has_special_chars(content: &str) -> bool {
    let trimmed = content.strip_suffix(TERMINATORS).unwrap_or(content);
    let without_placeholders = trimmed.replace(PLACEHOLDER, "");
    SPECIAL_CHARS_REGEX.is_match(&without_placeholders)
}

fn word_count(content: &str) -> usize {
    let normalized = content.replace(PLACEHOLDER, PLACEHOLDER_WORD);
    WORD_SEPARATOR_REGEX
        .split(&normalized)
        .filter(|token| !token.is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_accepts_plain_sentences() {
        assert!(is_sentence("Hello world"));
        assert!(is_sentence("You have been kicked from the server"));
        assert!(is_sentence("Welcome back!"));
        assert!(is_sentence("Are you sure?"));
        assert!(is_sentence("Saving your progress."));
        assert!(is_sentence("Привет мир"));
    }

    #[test]
    fn test_rejects_upper_case_constants() {
        assert!(!is_sentence("ERR_001"));
        assert!(!is_sentence("SAVE BUTTON"));
        assert!(!is_sentence("404"));
        assert!(!is_sentence(""));
        assert!(!is_sentence("   "));
    }

    #[test]
    fn test_rejects_code_like_tokens() {
        assert!(!is_sentence("addons/hud/cl_init.lua"));
        assert!(!is_sentence("player_name"));
        assert!(!is_sentence("on:click handler"));
        assert!(!is_sentence("Hello, world"));
        assert!(!is_sentence("key = value"));
        assert!(!is_sentence("You have %d points"));
    }

    #[test]
    fn test_only_one_trailing_terminator_is_tolerated() {
        assert!(is_sentence("Wait for it."));
        assert!(!is_sentence("Wait for it..."));
        assert!(!is_sentence("Really?!"));
        assert!(!is_sentence("Mid. sentence"));
    }

    #[test]
    fn test_placeholder_is_protected() {
        assert!(is_sentence("Press %s to continue"));
        assert!(is_sentence("%s joined the game"));
        assert!(is_sentence("Welcome %s"));
        assert!(!is_sentence("Welcome %s%"));
    }

    #[test]
    fn test_placeholder_counts_as_a_word() {
        assert!(is_sentence("Hello %s"));
        assert!(!is_sentence("%s"));
    }

    #[test]
    fn test_rejects_single_words() {
        assert!(!is_sentence("Hello"));
        assert!(!is_sentence("Continue."));
        assert!(!is_sentence("hud"));
    }

    #[test]
    fn test_apostrophes_split_words() {
        // `'` is not in the symbol class; it separates tokens.
        assert!(is_sentence("Don't"));
        assert_eq!(word_count("Don't"), 2);
    }

    #[test]
    fn test_accented_letters_stay_inside_words() {
        assert_eq!(word_count("Réessayer"), 1);
        assert!(!is_sentence("Réessayer"));
        assert!(is_sentence("Réessayer plus tard"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(word_count("  spaced   out  "), 2);
        assert_eq!(word_count("Press %s now"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_is_deterministic() {
        for text in ["Hello world", "ERR_001", "Press %s to continue", "a.b"] {
            assert_eq!(is_sentence(text), is_sentence(text));
        }
    }
}
