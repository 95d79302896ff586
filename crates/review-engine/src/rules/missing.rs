use sow_types::{Issue, IssueKind, SectionId, SectionMap, Severity};

/// Flag every critical section whose body is empty or blank, in section
/// declaration order.
pub fn check_missing_sections(sections: &SectionMap) -> Vec<Issue> {
    let mut issues = Vec::new();

    for id in SectionId::ALL {
        if sections.get(id).trim().is_empty() {
            issues.push(Issue {
                kind: IssueKind::MissingSection,
                severity: Severity::Critical,
                message: format!("Missing critical section: {}", id.label()),
                suggestion: format!("Add a section for {}.", id.label()),
                section: Some(id),
                term: None,
                patterns: None,
            });
        }
    }

    issues
}
