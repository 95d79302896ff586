pub mod types;

pub use types::{
    Issue, IssueKind, ReviewReport, RiskWeights, SectionId, SectionMap, Severity, SowDocument,
    Summary,
};
