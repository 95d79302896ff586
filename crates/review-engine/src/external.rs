//! Seam for an out-of-process reviewer (an LLM service in practice).

use sow_types::Issue;

/// An external collaborator that reviews the normalized full text and
/// returns issue-shaped records.
///
/// Transport, timeouts and retries are entirely the implementor's concern;
/// the core only concatenates whatever comes back after its own findings,
/// with no deduplication.
pub trait ExternalReviewer {
    fn review(&self, full_text: &str) -> anyhow::Result<Vec<Issue>>;
}
