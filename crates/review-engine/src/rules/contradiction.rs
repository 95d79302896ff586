use sow_types::{Issue, IssueKind, Severity};

use crate::config::RuleConfig;

/// Flag pattern pairs whose captured values disagree.
///
/// Only the first match of each pattern is considered, and the two spans are
/// not required to be contextually related; they may sit in unrelated
/// sentences anywhere in the document. That imprecision is accepted: this is
/// a cheap heuristic, not sentence-level reasoning.
pub fn check_contradictions(text: &str, config: &RuleConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    for pair in &config.contradictions {
        let (Some(first), Some(second)) = (pair.first.captures(text), pair.second.captures(text))
        else {
            continue;
        };
        let (Some(a), Some(b)) = (first.get(1), second.get(1)) else {
            continue;
        };

        if a.as_str() != b.as_str() {
            issues.push(Issue {
                kind: IssueKind::Contradiction,
                severity: Severity::Critical,
                message: format!(
                    "Potential contradiction: \"{}\" vs. \"{}\"",
                    &first[0], &second[0]
                ),
                suggestion: "Clarify the timeline and ensure consistency.".to_string(),
                section: None,
                term: None,
                patterns: Some([
                    pair.first.as_str().to_string(),
                    pair.second.as_str().to_string(),
                ]),
            });
        }
    }

    issues
}
