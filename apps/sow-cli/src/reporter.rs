//! Report serialization and terminal rendering.

use std::fs::File;
use std::io::BufWriter;

use sow_types::ReviewReport;

/// Write the full report as pretty-printed JSON. Issue fields round-trip
/// through this file unchanged.
pub fn save_json_report(report: &ReviewReport, path: &str) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}

/// Plain-text rendering of the issue list and summary for the terminal.
pub fn render_text_report(report: &ReviewReport) -> String {
    let mut out = String::new();

    if report.issues.is_empty() {
        out.push_str("No issues found.\n");
    } else {
        for (idx, issue) in report.issues.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. [{}] {} | {}\n",
                idx + 1,
                issue.severity.as_str(),
                issue.message,
                issue.suggestion
            ));
        }
    }

    out.push_str(&format!(
        "Summary: {} critical, {} warning, {} info (risk score {})",
        report.summary.critical, report.summary.warning, report.summary.info, report.risk_score
    ));
    out
}
