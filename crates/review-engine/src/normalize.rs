//! Text normalization.
//!
//! Reduces raw extracted text to a canonical line-oriented form: boilerplate
//! headers and footers dropped, horizontal whitespace collapsed, characters
//! outside a safe allow-list stripped. Line breaks survive untouched; they
//! are the structural anchor the segmenter relies on.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::RuleConfig;

lazy_static! {
    /// Everything outside word characters, whitespace and basic punctuation.
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s.,;:!?\-()\[\]{}]").unwrap();
    /// Runs of spaces and tabs. Newlines are deliberately left alone.
    static ref HORIZONTAL_WS: Regex = Regex::new(r"[ \t]+").unwrap();
}

/// Normalize raw text. Never fails; unusable input yields an empty string,
/// and re-running on already-normalized text changes nothing.
pub fn normalize(raw: &str, config: &RuleConfig) -> String {
    let mut kept: Vec<String> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let sanitized = DISALLOWED.replace_all(trimmed, "");
        let collapsed = HORIZONTAL_WS.replace_all(&sanitized, " ");
        let cleaned = collapsed.trim();
        if cleaned.is_empty() {
            continue;
        }

        // Checked both before and after sanitizing so a pass over its own
        // output reaches the same verdict (idempotence).
        if is_boilerplate(trimmed, config) || is_boilerplate(cleaned, config) {
            continue;
        }

        kept.push(cleaned.to_string());
    }

    kept.join("\n")
}

fn is_boilerplate(line: &str, config: &RuleConfig) -> bool {
    config.boilerplate.iter().any(|re| re.is_match(line))
}
