//! Property-based tests for the normalizer, segmenter and scoring.

use proptest::prelude::*;
use review_engine::{normalize, score, segment, ReviewEngine, RuleConfig};
use sow_types::{Issue, IssueKind, SectionId, Severity};

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Critical),
        Just(Severity::Warning),
        Just(Severity::Info),
    ]
}

fn issue() -> impl Strategy<Value = Issue> {
    severity().prop_map(|severity| Issue {
        kind: IssueKind::AmbiguousTerm,
        severity,
        message: "m".to_string(),
        suggestion: "s".to_string(),
        section: None,
        term: None,
        patterns: None,
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,300}") {
        let config = RuleConfig::standard();
        let once = normalize::normalize(&raw, &config);
        let twice = normalize::normalize(&once, &config);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_output_has_no_blank_lines(raw in "\\PC{0,300}") {
        let config = RuleConfig::standard();
        let normalized = normalize::normalize(&raw, &config);
        prop_assert!(normalized.lines().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn segmentation_always_yields_all_nine_sections(raw in "\\PC{0,300}") {
        let config = RuleConfig::standard();
        let normalized = normalize::normalize(&raw, &config);
        let sections = segment::segment(&normalized, &config);
        prop_assert_eq!(sections.iter().count(), 9);

        let json = serde_json::to_value(&sections).unwrap();
        let object = json.as_object().unwrap();
        prop_assert_eq!(object.len(), 9);
        for id in SectionId::ALL {
            prop_assert!(object.contains_key(id.key()));
        }
    }

    #[test]
    fn summary_totals_match_issue_count(issues in prop::collection::vec(issue(), 0..40)) {
        let summary = score::summarize(&issues);
        prop_assert_eq!(summary.total() as usize, issues.len());
    }

    #[test]
    fn risk_score_is_sum_of_default_weights(issues in prop::collection::vec(issue(), 0..40)) {
        let weights = sow_types::RiskWeights::default();
        let expected: u32 = issues.iter().map(|i| weights.weight(i.severity)).sum();
        prop_assert_eq!(score::risk_score(&issues, &weights), expected);
    }

    #[test]
    fn engine_never_panics_on_arbitrary_text(raw in "\\PC{0,500}") {
        let engine = ReviewEngine::new();
        let analysis = engine.run_checks(&raw);
        // Issue order is always missing -> ambiguous -> contradiction.
        let mut last = IssueKind::MissingSection;
        for issue in &analysis.issues {
            let rank = |k: IssueKind| match k {
                IssueKind::MissingSection => 0,
                IssueKind::AmbiguousTerm => 1,
                IssueKind::Contradiction => 2,
            };
            prop_assert!(rank(issue.kind) >= rank(last));
            last = issue.kind;
        }
    }
}
