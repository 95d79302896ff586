//! End-to-end cases over synthetic SOW documents.

use review_engine::ReviewEngine;
use sow_types::{IssueKind, SectionId, Severity};

const MISSING_TIMELINE_SOW: &str = "\
PROJECT OVERVIEW
This project is for a new school building.
SCOPE OF WORK
Includes foundation, structure, and finishing.
MATERIALS
As per standard.
COSTS
Estimated at 1,000,000.
PAYMENT TERMS
50 upfront, 50 on completion.
DELIVERABLES
Complete building.
QUALITY STANDARDS
High quality.
";

const CONTRADICTORY_SOW: &str = "\
PROJECT OVERVIEW
New hospital construction.
SCOPE OF WORK
All civil and MEP works.
TIMELINE
Completion in 6 months.
The phases spanning 12 months may overlap.
MATERIALS
Concrete, steel, glass.
COSTS
5,000,000 total.
PAYMENT TERMS
Monthly billing in arrears.
DELIVERABLES
Hospital building.
QUALITY STANDARDS
As required.
LEGAL CLAUSES
Standard contract wording applies.
";

#[test]
fn flags_missing_timeline_and_ambiguous_term() {
    let engine = ReviewEngine::new();
    let analysis = engine.run_checks(MISSING_TIMELINE_SOW);

    let missing: Vec<SectionId> = analysis
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::MissingSection)
        .filter_map(|i| i.section)
        .collect();
    assert!(missing.contains(&SectionId::Timeline));
    assert!(missing.contains(&SectionId::LegalClauses));

    let ambiguous: Vec<&str> = analysis
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::AmbiguousTerm)
        .filter_map(|i| i.term.as_deref())
        .collect();
    assert!(ambiguous.contains(&"as per standard"));
}

#[test]
fn flags_contradictory_timeline() {
    let engine = ReviewEngine::new();
    let analysis = engine.run_checks(CONTRADICTORY_SOW);

    let contradictions: Vec<_> = analysis
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::Contradiction)
        .collect();
    assert_eq!(contradictions.len(), 1);
    assert_eq!(contradictions[0].severity, Severity::Critical);
    assert!(contradictions[0].message.contains("Completion in 6 months"));
    assert!(contradictions[0]
        .message
        .contains("phases spanning 12 months"));
}

#[test]
fn three_headers_out_of_nine_yield_six_missing_section_issues() {
    let text = "\
PROJECT OVERVIEW
Build a warehouse.
SCOPE OF WORK
Foundation and framing.
TIMELINE
Six months from notice to proceed.
";
    let engine = ReviewEngine::new();
    let analysis = engine.run_checks(text);

    let missing: Vec<SectionId> = analysis
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::MissingSection)
        .filter_map(|i| i.section)
        .collect();
    assert_eq!(
        missing,
        vec![
            SectionId::Materials,
            SectionId::Costs,
            SectionId::PaymentTerms,
            SectionId::Deliverables,
            SectionId::QualityStandards,
            SectionId::LegalClauses,
        ]
    );
    assert!(analysis
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Critical)
        .all(|i| i.kind == IssueKind::MissingSection));
}

#[test]
fn risk_score_reflects_missing_timeline_document() {
    let engine = ReviewEngine::new();
    let document = sow_types::SowDocument::new("school.txt", MISSING_TIMELINE_SOW);
    let report = engine.analyze(&document);

    // At least one Critical (missing timeline) plus warnings.
    assert!(report.risk_score >= 10);
    assert_eq!(report.summary.total() as usize, report.issues.len());
}

#[test]
fn report_round_trips_through_json() {
    let engine = ReviewEngine::new();
    let document = sow_types::SowDocument::new("hospital.txt", CONTRADICTORY_SOW);
    let report = engine.analyze(&document);

    let json = serde_json::to_string_pretty(&report).unwrap();
    let back: sow_types::ReviewReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.issues, report.issues);
    assert_eq!(back.summary, report.summary);
    assert_eq!(back.risk_score, report.risk_score);
    assert_eq!(back.document_id, report.document_id);
}
