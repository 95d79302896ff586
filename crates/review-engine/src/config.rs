//! Compiled rule configuration.
//!
//! One canonical `RuleConfig` is built lazily from the builtin tables and
//! cloned into each engine instance; a custom table set can be compiled with
//! [`RuleConfig::from_tables`] and injected through
//! [`ReviewEngine::with_config`](crate::ReviewEngine::with_config).

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use sow_types::{RiskWeights, SectionId};
use thiserror::Error;

use crate::tables;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Header patterns for one section, anchored at line start.
#[derive(Debug, Clone)]
pub struct HeaderRule {
    pub section: SectionId,
    pub patterns: Vec<Regex>,
}

/// Fallback keyword set for one section.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub section: SectionId,
    pub keywords: Vec<String>,
}

/// An under-specified phrase to flag.
#[derive(Debug, Clone)]
pub struct AmbiguousTerm {
    pub label: String,
    pub pattern: Regex,
}

/// Two patterns whose first capture groups must agree when both match.
#[derive(Debug, Clone)]
pub struct ContradictionPair {
    pub first: Regex,
    pub second: Regex,
}

/// Immutable rule set driving normalization, segmentation and the checkers.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub boilerplate: Vec<Regex>,
    pub headers: Vec<HeaderRule>,
    pub fallback: Vec<KeywordRule>,
    pub ambiguous_terms: Vec<AmbiguousTerm>,
    pub contradictions: Vec<ContradictionPair>,
    pub weights: RiskWeights,
}

lazy_static! {
    static ref STANDARD: RuleConfig = RuleConfig::from_tables(
        tables::BOILERPLATE_PATTERNS,
        tables::SECTION_HEADERS,
        tables::FALLBACK_KEYWORDS,
        tables::AMBIGUOUS_TERMS,
        tables::CONTRADICTION_PAIRS,
        RiskWeights::default(),
    )
    .unwrap();
}

impl RuleConfig {
    /// The canonical config built from the builtin tables.
    pub fn standard() -> RuleConfig {
        STANDARD.clone()
    }

    /// Compile a rule set from declarative tables.
    pub fn from_tables(
        boilerplate: &[&str],
        headers: &[(SectionId, &[&str])],
        fallback: &[(SectionId, &[&str])],
        ambiguous_terms: &[(&str, &str)],
        contradictions: &[(&str, &str)],
        weights: RiskWeights,
    ) -> Result<RuleConfig, ConfigError> {
        Ok(RuleConfig {
            boilerplate: boilerplate
                .iter()
                .map(|p| case_insensitive(p))
                .collect::<Result<_, _>>()?,
            headers: headers
                .iter()
                .map(|&(section, patterns)| {
                    Ok(HeaderRule {
                        section,
                        patterns: patterns
                            .iter()
                            .map(|p| anchored(p))
                            .collect::<Result<_, _>>()?,
                    })
                })
                .collect::<Result<_, ConfigError>>()?,
            fallback: fallback
                .iter()
                .map(|&(section, keywords)| KeywordRule {
                    section,
                    keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
                })
                .collect(),
            ambiguous_terms: ambiguous_terms
                .iter()
                .map(|&(label, pattern)| {
                    Ok(AmbiguousTerm {
                        label: label.to_string(),
                        pattern: case_insensitive(pattern)?,
                    })
                })
                .collect::<Result<_, ConfigError>>()?,
            contradictions: contradictions
                .iter()
                .map(|&(first, second)| {
                    Ok(ContradictionPair {
                        first: case_insensitive(first)?,
                        second: case_insensitive(second)?,
                    })
                })
                .collect::<Result<_, ConfigError>>()?,
            weights,
        })
    }
}

/// Case-insensitive search pattern. `Regex::as_str` keeps the raw pattern
/// text, which issue metadata relies on.
fn case_insensitive(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Header patterns only count when they match at the start of a line.
fn anchored(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
