//! The ordered diagnostic flag battery, modeled as data.
//!
//! Each rule pairs a predicate over the raw inputs and derived metrics
//! with a severity, a stable code, and a message renderer. Rules are
//! NOT mutually exclusive — the battery is evaluated top to bottom and
//! every matching rule appends exactly one flag, so a system can be
//! both `PSI_COLLAPSE` and `SIGMA_EXPLOSION` at once. The table order
//! is the contractual flag order.

use crate::domain::models::{DiagnosticMetrics, Flag, FlagSeverity, Profile};
use crate::domain::thresholds as th;

/// Everything a flag predicate may look at.
pub struct FlagContext<'a> {
    pub profile: &'a Profile,
    pub metrics: &'a DiagnosticMetrics,
}

/// One entry of the flag battery.
pub struct FlagRule {
    pub severity: FlagSeverity,
    pub code: &'static str,
    pub applies: fn(&FlagContext<'_>) -> bool,
    pub message: fn(&FlagContext<'_>) -> String,
}

/// The complete battery, in emission order: CRITICAL, SEVERE, WARNING,
/// then POSITIVE.
pub const FLAG_RULES: [FlagRule; 14] = [
    FlagRule {
        severity: FlagSeverity::Critical,
        code: "PSI_COLLAPSE",
        applies: |cx| cx.metrics.hard_score < th::PSI_CRITICAL,
        message: |cx| format!("PSI_COLLAPSE: Ψ={:.3}", cx.metrics.hard_score),
    },
    FlagRule {
        severity: FlagSeverity::Critical,
        code: "SIGMA_EXPLOSION",
        applies: |cx| cx.profile.dissonance > th::SIGMA_CRITICAL,
        message: |cx| format!("SIGMA_EXPLOSION: Σ={:.2}", cx.profile.dissonance),
    },
    FlagRule {
        severity: FlagSeverity::Critical,
        code: "SOVEREIGNTY_LOST",
        applies: |cx| cx.profile.sovereignty < th::SOVEREIGNTY_FLOOR,
        message: |cx| format!("SOVEREIGNTY_LOST: P={:.2}", cx.profile.sovereignty),
    },
    FlagRule {
        severity: FlagSeverity::Critical,
        code: "EXCLUSION_VIOLATION",
        applies: |cx| cx.metrics.exclusion > th::EXCLUSION_VIOLATION,
        message: |cx| format!("EXCLUSION_VIOLATION: Ψ×Σ={:.3}", cx.metrics.exclusion),
    },
    FlagRule {
        severity: FlagSeverity::Severe,
        code: "PSI_DEGRADED",
        applies: |cx| {
            cx.metrics.hard_score >= th::PSI_CRITICAL && cx.metrics.hard_score < th::PSI_DEGRADED
        },
        message: |cx| format!("PSI_DEGRADED: Ψ={:.3}", cx.metrics.hard_score),
    },
    FlagRule {
        severity: FlagSeverity::Severe,
        code: "SIGMA_HIGH",
        applies: |cx| {
            cx.profile.dissonance > th::SIGMA_HIGH && cx.profile.dissonance <= th::SIGMA_CRITICAL
        },
        message: |cx| format!("SIGMA_HIGH: Σ={:.2}", cx.profile.dissonance),
    },
    FlagRule {
        severity: FlagSeverity::Severe,
        code: "CBH_UNSTABLE",
        applies: |cx| cx.metrics.maintenance_cost > th::MAINTENANCE_UNSTABLE,
        message: |_| "CBH_UNSTABLE: maintenance cost superlinear".to_string(),
    },
    FlagRule {
        severity: FlagSeverity::Severe,
        code: "COOPERATION_FAILED",
        applies: |cx| cx.profile.cooperation < th::COOPERATION_FLOOR,
        message: |cx| format!("COOPERATION_FAILED: Ω={:.2}", cx.profile.cooperation),
    },
    FlagRule {
        severity: FlagSeverity::Warning,
        code: "HYPOCRISY_GAP",
        applies: |cx| cx.metrics.hypocrisy_gap > th::HYPOCRISY_GAP_MAX,
        message: |cx| format!("HYPOCRISY_GAP: Δ={:.4}", cx.metrics.hypocrisy_gap),
    },
    FlagRule {
        severity: FlagSeverity::Warning,
        code: "ALPHA_UNSTABLE",
        applies: |cx| cx.profile.resolution < th::RESOLUTION_FLOOR,
        message: |cx| format!("ALPHA_UNSTABLE: α={:.2}", cx.profile.resolution),
    },
    FlagRule {
        severity: FlagSeverity::Warning,
        code: "RESILIENCE_LOW",
        applies: |cx| cx.metrics.resilience < th::RESILIENCE_FLOOR,
        message: |cx| format!("RESILIENCE_LOW: Γ={:.3}", cx.metrics.resilience),
    },
    FlagRule {
        severity: FlagSeverity::Warning,
        code: "PLENITUDE_RISK",
        applies: |cx| cx.profile.plenitude < th::PLENITUDE_FLOOR,
        message: |cx| format!("PLENITUDE_RISK: ℘={:.2}", cx.profile.plenitude),
    },
    FlagRule {
        severity: FlagSeverity::Positive,
        code: "STAR_STATE",
        applies: |cx| {
            cx.metrics.hard_score >= th::PSI_STAR && cx.profile.dissonance < th::SIGMA_LOW
        },
        message: |_| "STAR_STATE ★".to_string(),
    },
    FlagRule {
        severity: FlagSeverity::Positive,
        code: "COHERENT_FLOW",
        applies: |cx| {
            cx.metrics.hard_score >= th::PSI_HEALTHY && cx.profile.dissonance < th::SIGMA_MODERATE
        },
        message: |_| "COHERENT_FLOW".to_string(),
    },
];

/// Evaluate the battery in order, collecting one flag per matching rule.
pub fn evaluate(cx: &FlagContext<'_>) -> Vec<Flag> {
    FLAG_RULES
        .iter()
        .filter(|rule| (rule.applies)(cx))
        .map(|rule| Flag {
            severity: rule.severity,
            code: rule.code,
            message: (rule.message)(cx),
        })
        .collect()
}
