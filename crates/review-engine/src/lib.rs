//! Rule-based review engine for Statement-of-Work documents.
//!
//! Pipeline: raw text -> [`normalize`](normalize::normalize) ->
//! [`segment`](segment::segment) -> [`rules`](rules::run_all) ->
//! [`score`](mod@score). Fully synchronous, no shared state across runs;
//! each analysis is isolated end to end.

pub mod config;
pub mod external;
pub mod normalize;
pub mod rules;
pub mod score;
pub mod segment;
pub mod tables;

pub use config::{ConfigError, RuleConfig};
pub use external::ExternalReviewer;

use serde::Serialize;
use sow_types::{Issue, ReviewReport, SectionMap, SowDocument};

/// ReviewEngine entry point
pub struct ReviewEngine {
    config: RuleConfig,
}

/// Intermediate result of one run: the canonical text, the section
/// partition, and the raw findings in emission order.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub full_text: String,
    pub sections: SectionMap,
    pub issues: Vec<Issue>,
}

impl ReviewEngine {
    /// Engine with the builtin rule tables.
    pub fn new() -> Self {
        Self {
            config: RuleConfig::standard(),
        }
    }

    /// Engine with an injected rule configuration.
    pub fn with_config(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Normalize, segment and rule-check raw text. Never fails; unusable
    /// input yields empty structures and the corresponding missing-section
    /// findings.
    pub fn run_checks(&self, raw_text: &str) -> Analysis {
        let full_text = normalize::normalize(raw_text, &self.config);
        let sections = segment::segment(&full_text, &self.config);
        let issues = rules::run_all(&full_text, &sections, &self.config);
        Analysis {
            full_text,
            sections,
            issues,
        }
    }

    /// Full analysis of a document, scored and stamped.
    pub fn analyze(&self, document: &SowDocument) -> ReviewReport {
        let analysis = self.run_checks(&document.raw_text);
        self.report(document, analysis.issues)
    }

    /// Core checks plus an external reviewer pass over the normalized text.
    /// External findings are appended verbatim after the core findings.
    pub fn analyze_with_reviewer(
        &self,
        document: &SowDocument,
        reviewer: &dyn ExternalReviewer,
    ) -> anyhow::Result<ReviewReport> {
        let analysis = self.run_checks(&document.raw_text);
        let mut issues = analysis.issues;
        issues.extend(reviewer.review(&analysis.full_text)?);
        Ok(self.report(document, issues))
    }

    fn report(&self, document: &SowDocument, issues: Vec<Issue>) -> ReviewReport {
        let summary = score::summarize(&issues);
        let risk_score = score::risk_score(&issues, &self.config.weights);
        ReviewReport {
            document_id: document.id.clone(),
            issues,
            summary,
            risk_score,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}
