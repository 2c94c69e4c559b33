//! Spreadsheet-compatible CSV reports: one row per diagnostic.
//!
//! Every field is numeric, an RFC 3339 timestamp, a state label, or a
//! `;`-joined path id list — nothing needs quoting.

use std::fmt::Write;

use crate::domain::models::SessionReport;

/// Column order of the CSV row format.
pub const COLUMNS: [&str; 22] = [
    "timestamp",
    "state",
    "sovereignty",
    "resolution",
    "cooperation",
    "dissonance",
    "consistency",
    "intelligence",
    "plenitude",
    "entropy",
    "support",
    "psi_hard",
    "psi_soft",
    "hypocrisy_gap",
    "hypocrisy",
    "efficiency",
    "resilience",
    "maintenance_cost",
    "exclusion",
    "alignment",
    "triangle",
    "paths_triggered",
];

/// Export one session as CSV, optionally with the header line.
pub fn to_csv(report: &SessionReport, include_header: bool) -> String {
    let mut out = String::new();
    if include_header {
        out.push_str(&COLUMNS.join(","));
        out.push('\n');
    }

    let diagnostic = &report.diagnostic;
    let profile = &diagnostic.profile;
    let metrics = &diagnostic.metrics;

    let triggered: Vec<&str> = report
        .paths
        .iter()
        .filter(|t| t.triggered)
        .map(|t| t.definition.id)
        .collect();
    let paths = if triggered.is_empty() {
        "NONE".to_string()
    } else {
        triggered.join(";")
    };

    let _ = write!(
        out,
        "{},{}",
        diagnostic.timestamp.to_rfc3339(),
        diagnostic.state
    );
    for value in [
        profile.sovereignty,
        profile.resolution,
        profile.cooperation,
        profile.dissonance,
        profile.consistency,
        profile.intelligence,
        profile.plenitude,
        profile.entropy,
        profile.support,
        metrics.hard_score,
        metrics.soft_score,
        metrics.hypocrisy_gap,
        metrics.hypocrisy,
        metrics.efficiency,
        metrics.resilience,
        metrics.maintenance_cost,
        metrics.exclusion,
        metrics.alignment,
        diagnostic.triangle.overall,
    ] {
        let _ = write!(out, ",{value:.6}");
    }
    let _ = writeln!(out, ",{paths}");

    out
}

/// Export multiple sessions as one CSV with a single header.
pub fn to_csv_batch(reports: &[SessionReport]) -> String {
    let mut out = String::new();
    for (index, report) in reports.iter().enumerate() {
        out.push_str(&to_csv(report, index == 0));
    }
    out
}
