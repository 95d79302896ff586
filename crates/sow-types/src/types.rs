use serde::{Deserialize, Deserializer, Serialize};

/// A Statement-of-Work document after text extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SowDocument {
    pub id: String,
    pub filename: String,
    pub raw_text: String,
    pub created_at: u64,
}

impl SowDocument {
    pub fn new(filename: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
            raw_text: raw_text.into(),
            created_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

/// Issue severity, most serious first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    /// Parse a severity name. Anything unrecognized counts as Info.
    pub fn parse(value: &str) -> Severity {
        let value = value.trim();
        if value.eq_ignore_ascii_case("critical") {
            Severity::Critical
        } else if value.eq_ignore_ascii_case("warning") {
            Severity::Warning
        } else {
            Severity::Info
        }
    }
}

// External review records may carry severity labels outside the known set;
// those fold into Info instead of failing the whole report.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Severity::parse(&value))
    }
}

/// The nine content categories every well-formed SOW is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    ProjectOverview,
    Scope,
    Timeline,
    Materials,
    Costs,
    PaymentTerms,
    Deliverables,
    QualityStandards,
    LegalClauses,
}

impl SectionId {
    /// Declaration order. Drives segmentation and missing-section checks.
    pub const ALL: [SectionId; 9] = [
        SectionId::ProjectOverview,
        SectionId::Scope,
        SectionId::Timeline,
        SectionId::Materials,
        SectionId::Costs,
        SectionId::PaymentTerms,
        SectionId::Deliverables,
        SectionId::QualityStandards,
        SectionId::LegalClauses,
    ];

    /// Identifier used in serialized reports.
    pub fn key(self) -> &'static str {
        match self {
            SectionId::ProjectOverview => "project_overview",
            SectionId::Scope => "scope",
            SectionId::Timeline => "timeline",
            SectionId::Materials => "materials",
            SectionId::Costs => "costs",
            SectionId::PaymentTerms => "payment_terms",
            SectionId::Deliverables => "deliverables",
            SectionId::QualityStandards => "quality_standards",
            SectionId::LegalClauses => "legal_clauses",
        }
    }

    /// Human-readable name used in issue messages.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::ProjectOverview => "Project Overview",
            SectionId::Scope => "Scope",
            SectionId::Timeline => "Timeline",
            SectionId::Materials => "Materials",
            SectionId::Costs => "Costs",
            SectionId::PaymentTerms => "Payment Terms",
            SectionId::Deliverables => "Deliverables",
            SectionId::QualityStandards => "Quality Standards",
            SectionId::LegalClauses => "Legal Clauses",
        }
    }
}

/// Fixed partition of a SOW into its nine expected sections.
///
/// Every section is always present; one with no recognized content holds an
/// empty string, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    pub project_overview: String,
    pub scope: String,
    pub timeline: String,
    pub materials: String,
    pub costs: String,
    pub payment_terms: String,
    pub deliverables: String,
    pub quality_standards: String,
    pub legal_clauses: String,
}

impl SectionMap {
    pub fn get(&self, id: SectionId) -> &str {
        match id {
            SectionId::ProjectOverview => &self.project_overview,
            SectionId::Scope => &self.scope,
            SectionId::Timeline => &self.timeline,
            SectionId::Materials => &self.materials,
            SectionId::Costs => &self.costs,
            SectionId::PaymentTerms => &self.payment_terms,
            SectionId::Deliverables => &self.deliverables,
            SectionId::QualityStandards => &self.quality_standards,
            SectionId::LegalClauses => &self.legal_clauses,
        }
    }

    pub fn get_mut(&mut self, id: SectionId) -> &mut String {
        match id {
            SectionId::ProjectOverview => &mut self.project_overview,
            SectionId::Scope => &mut self.scope,
            SectionId::Timeline => &mut self.timeline,
            SectionId::Materials => &mut self.materials,
            SectionId::Costs => &mut self.costs,
            SectionId::PaymentTerms => &mut self.payment_terms,
            SectionId::Deliverables => &mut self.deliverables,
            SectionId::QualityStandards => &mut self.quality_standards,
            SectionId::LegalClauses => &mut self.legal_clauses,
        }
    }

    pub fn set(&mut self, id: SectionId, body: String) {
        *self.get_mut(id) = body;
    }

    /// Section bodies in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &str)> {
        SectionId::ALL.iter().map(move |&id| (id, self.get(id)))
    }

    pub fn any_populated(&self) -> bool {
        SectionId::ALL.iter().any(|&id| !self.get(id).is_empty())
    }
}

/// Kind of finding produced by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingSection,
    AmbiguousTerm,
    Contradiction,
}

/// A single finding. Immutable once produced; fields round-trip losslessly
/// through serialization. The optional fields carry kind-specific metadata:
/// the missing section, the matched term, or the matched pattern pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub suggestion: String,
    #[serde(default)]
    pub section: Option<SectionId>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub patterns: Option<[String; 2]>,
}

/// Issue counts per severity. All three buckets are always reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
    pub critical: u32,
    pub warning: u32,
    pub info: u32,
}

impl Summary {
    pub fn total(self) -> u32 {
        self.critical + self.warning + self.info
    }
}

/// Severity weight table for the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub critical: u32,
    pub warning: u32,
    pub info: u32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            critical: 10,
            warning: 5,
            info: 1,
        }
    }
}

impl RiskWeights {
    pub fn weight(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

/// Final artifact of one analysis run, handed to the report writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewReport {
    pub document_id: String,
    pub issues: Vec<Issue>,
    pub summary: Summary,
    pub risk_score: u32,
    pub checked_at: u64,
}
