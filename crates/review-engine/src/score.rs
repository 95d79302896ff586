//! Issue aggregation: severity histogram and weighted risk score.

use sow_types::{Issue, RiskWeights, Severity, Summary};

/// Count issues per severity. All three buckets are reported even when zero.
pub fn summarize(issues: &[Issue]) -> Summary {
    let mut summary = Summary::default();
    for issue in issues {
        match issue.severity {
            Severity::Critical => summary.critical += 1,
            Severity::Warning => summary.warning += 1,
            Severity::Info => summary.info += 1,
        }
    }
    summary
}

/// Weighted sum of issue severities.
pub fn risk_score(issues: &[Issue], weights: &RiskWeights) -> u32 {
    issues
        .iter()
        .map(|issue| weights.weight(issue.severity))
        .sum()
}
