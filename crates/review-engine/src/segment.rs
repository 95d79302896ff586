//! Section segmentation.
//!
//! Two independent pure stages: header-driven segmentation, and a paragraph
//! keyword classifier used only when no header anywhere was recognized. The
//! orchestrating [`segment`] picks between them, so either stage can be
//! tested on its own.

use sow_types::{SectionId, SectionMap};

use crate::config::RuleConfig;

/// Partition normalized text into the fixed section set. Always returns all
/// nine sections; unmatched ones hold an empty string.
pub fn segment(text: &str, config: &RuleConfig) -> SectionMap {
    let (sections, any_populated) = segment_by_headers(text, config);
    if any_populated {
        sections
    } else {
        segment_by_keywords(text, config)
    }
}

/// Primary stage: split on recognized section header lines.
///
/// Lines seen before the first header are dropped. Returns the map together
/// with whether any section received content, which the caller uses to decide
/// on the fallback.
pub fn segment_by_headers(text: &str, config: &RuleConfig) -> (SectionMap, bool) {
    let mut sections = SectionMap::default();
    let mut open: Option<SectionId> = None;
    let mut content: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((section, rest)) = match_header(line, config) {
            flush(&mut sections, open, &content);
            open = Some(section);
            content.clear();
            // Header and body on the same line: keep what trails the header.
            if !rest.is_empty() {
                content.push(rest);
            }
        } else if open.is_some() {
            content.push(line);
        }
    }
    flush(&mut sections, open, &content);

    let any_populated = sections.any_populated();
    (sections, any_populated)
}

/// First matching pattern across all sections in declaration order wins.
/// Returns the section and whatever text trails the matched header token.
fn match_header<'a>(line: &'a str, config: &RuleConfig) -> Option<(SectionId, &'a str)> {
    for rule in &config.headers {
        for pattern in &rule.patterns {
            if let Some(m) = pattern.find(line) {
                return Some((rule.section, line[m.end()..].trim()));
            }
        }
    }
    None
}

/// A later empty occurrence of a header never wipes content captured earlier.
fn flush(sections: &mut SectionMap, open: Option<SectionId>, content: &[&str]) {
    if let Some(section) = open {
        if !content.is_empty() {
            sections.set(section, content.join("\n").trim().to_string());
        }
    }
}

/// Fallback stage: classify blank-line separated paragraphs by keyword.
///
/// Each paragraph joins at most one section, the first in declaration order
/// with a keyword hit; paragraphs matching nothing are dropped.
pub fn segment_by_keywords(text: &str, config: &RuleConfig) -> SectionMap {
    let mut sections = SectionMap::default();

    for paragraph in text.split("\n\n") {
        let lower = paragraph.to_lowercase();
        let hit = config
            .fallback
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw.as_str())));

        if let Some(rule) = hit {
            let body = sections.get_mut(rule.section);
            if body.is_empty() {
                body.push_str(paragraph);
            } else {
                body.push_str("\n\n");
                body.push_str(paragraph);
            }
        }
    }

    sections
}
