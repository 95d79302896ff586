use sow_types::{Issue, IssueKind, Severity};

use crate::config::RuleConfig;

/// Flag under-specified phrases in the full normalized text. One Warning per
/// matching term, however many times it recurs.
pub fn check_ambiguous_terms(text: &str, config: &RuleConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    for term in &config.ambiguous_terms {
        if term.pattern.is_match(text) {
            issues.push(Issue {
                kind: IssueKind::AmbiguousTerm,
                severity: Severity::Warning,
                message: format!("Ambiguous term found: \"{}\"", term.label),
                suggestion: "Replace with specific details.".to_string(),
                section: None,
                term: Some(term.label.clone()),
                patterns: None,
            });
        }
    }

    issues
}
