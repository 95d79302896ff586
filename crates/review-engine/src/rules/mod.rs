//! Rule checkers. Each is a pure function over the section map or the full
//! normalized text; results are concatenated in a fixed order with no
//! short-circuiting between checkers.

pub mod ambiguous;
pub mod contradiction;
pub mod missing;

use sow_types::{Issue, SectionMap};

use crate::config::RuleConfig;

/// Run every checker: missing sections, then ambiguous terms, then
/// contradictions.
pub fn run_all(full_text: &str, sections: &SectionMap, config: &RuleConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(missing::check_missing_sections(sections));
    issues.extend(ambiguous::check_ambiguous_terms(full_text, config));
    issues.extend(contradiction::check_contradictions(full_text, config));
    issues
}
