//! Compact plain-text reports for terminals and logs.

use std::fmt::Write;

use crate::domain::models::{SessionReport, VerificationResult};

/// Export one session as a fixed-width text block.
pub fn render_session(report: &SessionReport) -> String {
    let diagnostic = &report.diagnostic;
    let metrics = &diagnostic.metrics;
    let mut out = String::new();

    let _ = writeln!(out, "╔══════════════════════════════════════════════════╗");
    let _ = writeln!(out, "║  COHERA — Coherence Diagnostic Report            ║");
    let _ = writeln!(out, "╚══════════════════════════════════════════════════╝");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  STATE:  {} {}",
        diagnostic.state.icon(),
        diagnostic.state
    );
    let _ = writeln!(
        out,
        "  TIME:   {}",
        diagnostic.timestamp.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  ── Primary Metrics ──");
    let _ = writeln!(out, "  Ψ hard:     {:>8.4}", metrics.hard_score);
    let _ = writeln!(out, "  Ψ soft:     {:>8.4}", metrics.soft_score);
    let _ = writeln!(out, "  Δ(Σ):       {:>8.4}", metrics.hypocrisy);
    let _ = writeln!(out, "  Ξ:          {:>8.4}", metrics.efficiency);
    let _ = writeln!(out, "  Γ:          {:>8.4}", metrics.resilience);
    let _ = writeln!(out);
    let _ = writeln!(out, "  ── Integrity Checks ──");
    let _ = writeln!(out, "  Exclusion:  {:>8.4}", metrics.exclusion);
    let _ = writeln!(out, "  Triangle:   {:>8.2}", diagnostic.triangle.overall);
    let _ = writeln!(out);

    if diagnostic.flags.is_empty() {
        let _ = writeln!(out, "  FLAGS:  none");
    } else {
        let _ = writeln!(out, "  FLAGS:");
        for flag in &diagnostic.flags {
            let _ = writeln!(out, "    [{}] {}", flag.severity, flag.message);
        }
    }
    let _ = writeln!(out);

    let triggered = report.triggered_paths();
    if triggered.is_empty() {
        let _ = writeln!(out, "  PATHS:  none triggered");
    } else {
        let _ = writeln!(out, "  PATHS:");
        for trigger in triggered {
            let definition = trigger.definition;
            let _ = writeln!(
                out,
                "    ► {} — {} (observed {:.3}, target {})",
                definition.id, definition.name, trigger.observed, definition.target
            );
            for (index, step) in definition.steps.iter().enumerate() {
                let _ = writeln!(out, "      {}. {step}", index + 1);
            }
        }
    }

    if let Some(verification) = &report.verification {
        let _ = writeln!(out);
        out.push_str(&render_verification(verification));
    }

    out
}

/// Export a verification result as a fixed-width delta table.
pub fn render_verification(verification: &VerificationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "  ── Verification ──");
    let _ = writeln!(out, "  Verdict: {}", verification.verdict);
    let _ = writeln!(
        out,
        "  Ψ: {:.4} → {:.4} (Δ={:+.4})",
        verification.hard_before, verification.hard_after, verification.hard_delta
    );
    let _ = writeln!(
        out,
        "  State: {} → {}",
        verification.before_state, verification.after_state
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {:<16} {:>8} {:>8} {:>9} Status",
        "Metric", "Before", "After", "Δ"
    );
    let _ = writeln!(out, "  {}", "─".repeat(52));
    for delta in &verification.deltas {
        let _ = writeln!(
            out,
            "  {:<16} {:>8.4} {:>8.4} {:>+9.4} {} {}",
            delta.metric,
            delta.before,
            delta.after,
            delta.delta,
            delta.status.arrow(),
            delta.status
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Profile;
    use crate::services::{path_selector, DiagnosticEngine, VerificationEngine};

    #[test]
    fn test_session_block_contains_state_and_metrics() {
        let diagnostic =
            DiagnosticEngine::new().run(&Profile::new(0.8, 0.8, 0.8, 0.3, 0.8, 0.8, 0.85, 0.4));
        let paths = path_selector::evaluate(&diagnostic);
        let text = render_session(&SessionReport::new(diagnostic, paths));
        assert!(text.contains("STATE:"));
        assert!(text.contains("Ψ hard:"));
        assert!(text.contains("PATHS:"));
    }

    #[test]
    fn test_verification_table_lists_all_metrics() {
        let engine = DiagnosticEngine::new();
        let before = engine.run(&Profile::new(0.5, 0.5, 0.5, 1.0, 0.5, 0.5, 0.6, 0.5));
        let after = Profile::new(0.8, 0.8, 0.8, 0.2, 0.8, 0.8, 0.85, 0.3);
        let verification = VerificationEngine::new().verify(&before, &after);

        let text = render_verification(&verification);
        assert!(text.contains("Verdict:"));
        for metric in ["psi_hard", "dissonance", "entropy"] {
            assert!(text.contains(metric), "missing {metric}");
        }
    }
}
