//! Human-readable Markdown reports with status glyphs.
//!
//! Suitable for documentation, issue trackers, or generated dashboards.

use std::fmt::Write;

use crate::domain::models::{DiagnosticMetrics, SessionReport, SystemState};
use crate::domain::thresholds as th;

/// Status glyph for one computed metric.
fn metric_glyph(name: &str, value: f64) -> &'static str {
    match name {
        "psi_hard" => SystemState::classify(value).icon(),
        "psi_soft" | "efficiency" => {
            if value >= 0.5 {
                "●"
            } else {
                "◌"
            }
        }
        "hypocrisy_gap" => {
            if value <= th::HYPOCRISY_GAP_MAX {
                "●"
            } else {
                "◌"
            }
        }
        "hypocrisy" => {
            if value < 0.15 {
                "●"
            } else if value < 0.25 {
                "◐"
            } else {
                "✕"
            }
        }
        "resilience" => {
            if value >= 0.4 {
                "●"
            } else {
                "◌"
            }
        }
        "maintenance_cost" => {
            if value < th::MAINTENANCE_UNSTABLE {
                "●"
            } else {
                "✕"
            }
        }
        "exclusion" => {
            if value < th::EXCLUSION_CLEAN {
                "●"
            } else {
                "✕"
            }
        }
        _ => "●",
    }
}

fn push_metric_rows(out: &mut String, metrics: &DiagnosticMetrics) {
    for (name, value) in metrics.named_values() {
        let _ = writeln!(
            out,
            "| {name} | {value:.4} | {} |",
            metric_glyph(name, value)
        );
    }
}

/// Export one session as a Markdown report.
pub fn to_markdown(report: &SessionReport) -> String {
    let diagnostic = &report.diagnostic;
    let profile = &diagnostic.profile;
    let mut out = String::new();

    let _ = writeln!(out, "# Coherence Diagnostic Report");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Date:** {}",
        diagnostic.timestamp.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(
        out,
        "**State:** {} {} — {}",
        diagnostic.state.icon(),
        diagnostic.state,
        diagnostic.state.description()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);

    // Phase 1
    let _ = writeln!(out, "## Phase 1 — Diagnostic");
    let _ = writeln!(out);
    let _ = writeln!(out, "### Input Parameters");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Parameter | Symbol | Value |");
    let _ = writeln!(out, "|-----------|--------|-------|");
    for (label, symbol, value) in [
        ("Sovereignty", "P", profile.sovereignty),
        ("Resolution", "α", profile.resolution),
        ("Cooperation", "Ω", profile.cooperation),
        ("Dissonance", "Σ", profile.dissonance),
        ("Consistency", "C", profile.consistency),
        ("Intelligence", "I", profile.intelligence),
        ("Plenitude", "℘", profile.plenitude),
        ("Entropy", "H", profile.entropy),
        ("Ext. Support", "Φ", profile.support),
    ] {
        let _ = writeln!(out, "| {label} | {symbol} | {value:.2} |");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "### Computed Metrics");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value | Status |");
    let _ = writeln!(out, "|--------|-------|--------|");
    push_metric_rows(&mut out, &diagnostic.metrics);
    let _ = writeln!(
        out,
        "| triangle | {:.2} | {} |",
        diagnostic.triangle.overall,
        if diagnostic.triangle.overall >= 1.0 {
            "●"
        } else {
            "◐"
        }
    );
    let _ = writeln!(out);

    if !diagnostic.flags.is_empty() {
        let _ = writeln!(out, "### Flags");
        let _ = writeln!(out);
        for flag in &diagnostic.flags {
            let _ = writeln!(out, "- **[{}]** {}", flag.severity, flag.message);
        }
        let _ = writeln!(out);
    }

    // Phase 2
    let _ = writeln!(out, "## Phase 2 — Recalibration Paths");
    let _ = writeln!(out);
    let triggered = report.triggered_paths();
    if triggered.is_empty() {
        let _ = writeln!(
            out,
            "No recalibration paths triggered. System within acceptable bounds."
        );
        let _ = writeln!(out);
    } else {
        let _ = writeln!(out, "**{} path(s) triggered:**", triggered.len());
        let _ = writeln!(out);
        for trigger in triggered {
            let definition = trigger.definition;
            let _ = writeln!(
                out,
                "### {} — {} (observed {:.3}, target {})",
                definition.id, definition.name, trigger.observed, definition.target
            );
            let _ = writeln!(out);
            for (index, step) in definition.steps.iter().enumerate() {
                let _ = writeln!(out, "{}. {step}", index + 1);
            }
            let _ = writeln!(out);
        }
    }

    // Phase 3
    if let Some(verification) = &report.verification {
        let _ = writeln!(out, "## Phase 3 — Verification");
        let _ = writeln!(out);
        let _ = writeln!(out, "**Verdict:** {}", verification.verdict);
        let _ = writeln!(
            out,
            "**State:** {} → {}",
            verification.before_state, verification.after_state
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "| Metric | Before | After | Δ | Status |");
        let _ = writeln!(out, "|--------|--------|-------|---|--------|");
        for delta in &verification.deltas {
            let _ = writeln!(
                out,
                "| {} | {:.4} | {:.4} | {:+.4} | {} {} |",
                delta.metric,
                delta.before,
                delta.after,
                delta.delta,
                delta.status.arrow(),
                delta.status
            );
        }
        let _ = writeln!(out);
    }

    out
}
