//! Builtin pattern tables.
//!
//! The tables are plain data so the checkers never hard-code a pattern;
//! `RuleConfig` compiles them once per process. Swapping a table (for tests
//! or localization) never touches control flow.

use sow_types::SectionId;

/// Lines matching any of these are page furniture and are dropped during
/// normalization. Matched case-insensitively anywhere in the line.
pub const BOILERPLATE_PATTERNS: &[&str] = &[
    r"page \d+ of \d+",
    r"confidential",
    r"draft",
    r"version \d+\.\d+",
    r"(?:©|\(c\)|copyright) \d{4}",
    r"proprietary",
    r"page \d+",
    r"prepared by:",
    r"approved by:",
    r"date:",
    r"revision:",
];

/// Header patterns per section, anchored at line start when compiled.
///
/// Order matters twice: sections are scanned in declaration order and
/// patterns within a section in listed order, so broad patterns (`scope`)
/// sit behind the narrower ones (`scope of work`) they would shadow.
pub const SECTION_HEADERS: &[(SectionId, &[&str])] = &[
    (
        SectionId::ProjectOverview,
        &[
            r"project\s+overview",
            r"introduction",
            r"background",
            r"purpose",
            r"project\s+description",
        ],
    ),
    (
        SectionId::Scope,
        &[
            r"scope\s+of\s+work",
            r"scope",
            r"work\s+scope",
            r"project\s+scope",
            r"statement\s+of\s+work",
        ],
    ),
    (
        SectionId::Timeline,
        &[
            r"timeline",
            r"schedule",
            r"duration",
            r"deadline",
            r"milestone",
            r"project\s+schedule",
            r"time\s+frame",
        ],
    ),
    (
        SectionId::Materials,
        &[
            r"materials",
            r"equipment",
            r"supplies",
            r"resources",
            r"material\s+requirements",
        ],
    ),
    (
        SectionId::Costs,
        &[
            r"costs?",
            r"budget",
            r"pricing",
            r"estimate",
            r"financial",
            r"cost\s+breakdown",
            r"budgetary",
        ],
    ),
    (
        SectionId::PaymentTerms,
        &[
            r"payment\s+terms?",
            r"payment",
            r"invoice",
            r"billing",
            r"payment\s+schedule",
        ],
    ),
    (
        SectionId::Deliverables,
        &[r"deliverables?", r"output", r"result", r"product", r"delivery"],
    ),
    (
        SectionId::QualityStandards,
        &[
            r"quality\s+standards?",
            r"quality",
            r"standard",
            r"specification",
            r"requirement",
            r"quality\s+assurance",
        ],
    ),
    (
        SectionId::LegalClauses,
        &[
            r"legal\s+clauses?",
            r"legal",
            r"clause",
            r"liability",
            r"warranty",
            r"indemnification",
            r"terms\s+and\s+conditions",
        ],
    ),
];

/// Keyword sets for the paragraph fallback when no headers were recognized.
/// A paragraph joins the first section (declaration order) with a hit.
pub const FALLBACK_KEYWORDS: &[(SectionId, &[&str])] = &[
    (
        SectionId::ProjectOverview,
        &["project overview", "introduction", "background"],
    ),
    (SectionId::Scope, &["scope of work", "scope", "work scope"]),
    (
        SectionId::Timeline,
        &["timeline", "schedule", "duration", "deadline"],
    ),
    (SectionId::Materials, &["materials", "equipment", "supplies"]),
    (SectionId::Costs, &["cost", "budget", "pricing", "estimate"]),
    (SectionId::PaymentTerms, &["payment", "invoice", "billing"]),
    (SectionId::Deliverables, &["deliverable", "output", "result"]),
    (
        SectionId::QualityStandards,
        &["quality", "standard", "specification"],
    ),
    (
        SectionId::LegalClauses,
        &["legal", "clause", "liability", "warranty"],
    ),
];

/// Under-specified phrases worth flagging: (display label, search pattern).
pub const AMBIGUOUS_TERMS: &[(&str, &str)] = &[
    ("as per standard", r"as per standard"),
    ("TBD", r"TBD"),
    ("to be determined", r"to be determined"),
    ("as required", r"as required"),
    ("if necessary", r"if necessary"),
    ("subject to change", r"subject to change"),
    ("etc.", r"etc\."),
    ("or equivalent", r"or equivalent"),
    ("as needed", r"as needed"),
    ("unless otherwise specified", r"unless otherwise specified"),
];

/// Pattern pairs whose first capture groups must agree when both appear in
/// the same document.
pub const CONTRADICTION_PAIRS: &[(&str, &str)] = &[
    (
        r"completion in (\d+) months",
        r"phases? spanning (\d+) months",
    ),
    (
        r"start date:? (\w+ \d{4})",
        r"completion date:? (\w+ \d{4})",
    ),
];
