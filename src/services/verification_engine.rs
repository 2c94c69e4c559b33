//! Phase 3: recalibration verification.
//!
//! Re-runs a fresh Phase 1 diagnostic over the updated profile and
//! diffs it against the earlier snapshot: eleven tracked metrics with
//! polarity-adjusted qualitative statuses, plus an overall verdict
//! derived from the hard-score delta alone.

use chrono::Utc;

use crate::domain::models::{
    DeltaStatus, DiagnosticResult, MetricDelta, Profile, VerificationResult, Verdict,
};
use crate::services::diagnostic_engine::DiagnosticEngine;

/// Deltas inside ±this band report as UNCHANGED.
const DEAD_BAND: f64 = 0.001;

/// Hard-score delta above this is a successful recalibration.
const SUCCESS_DELTA: f64 = 0.05;

/// Hard-score delta below this is a detected regression. Asymmetric on
/// purpose: small negative drift inside (−0.01, 0] still reads as "no
/// significant change".
const REGRESSION_DELTA: f64 = -0.01;

/// One tracked metric: stable name, polarity, and its accessor.
struct MetricSpec {
    name: &'static str,
    /// True for metrics where a decrease is an improvement.
    lower_is_better: bool,
    extract: fn(&DiagnosticResult) -> f64,
}

/// The fixed verification metric list, in display order.
const TRACKED_METRICS: [MetricSpec; 11] = [
    MetricSpec {
        name: "psi_hard",
        lower_is_better: false,
        extract: |d| d.metrics.hard_score,
    },
    MetricSpec {
        name: "psi_soft",
        lower_is_better: false,
        extract: |d| d.metrics.soft_score,
    },
    MetricSpec {
        name: "sovereignty",
        lower_is_better: false,
        extract: |d| d.profile.sovereignty,
    },
    MetricSpec {
        name: "resolution",
        lower_is_better: false,
        extract: |d| d.profile.resolution,
    },
    MetricSpec {
        name: "cooperation",
        lower_is_better: false,
        extract: |d| d.profile.cooperation,
    },
    MetricSpec {
        name: "dissonance",
        lower_is_better: true,
        extract: |d| d.profile.dissonance,
    },
    MetricSpec {
        name: "efficiency",
        lower_is_better: false,
        extract: |d| d.metrics.efficiency,
    },
    MetricSpec {
        name: "resilience",
        lower_is_better: false,
        extract: |d| d.metrics.resilience,
    },
    MetricSpec {
        name: "hypocrisy",
        lower_is_better: true,
        extract: |d| d.metrics.hypocrisy,
    },
    MetricSpec {
        name: "plenitude",
        lower_is_better: false,
        extract: |d| d.profile.plenitude,
    },
    MetricSpec {
        name: "entropy",
        lower_is_better: true,
        extract: |d| d.profile.entropy,
    },
];

/// Polarity-adjusted qualitative status of one delta.
fn delta_status(delta: f64, lower_is_better: bool) -> DeltaStatus {
    let effective = if lower_is_better { -delta } else { delta };
    if effective > DEAD_BAND {
        DeltaStatus::Improved
    } else if effective < -DEAD_BAND {
        DeltaStatus::Regressed
    } else {
        DeltaStatus::Unchanged
    }
}

/// Verdict from the hard-score delta alone.
fn verdict_for(hard_delta: f64) -> Verdict {
    if hard_delta > SUCCESS_DELTA {
        Verdict::RecalibrationSuccessful
    } else if hard_delta > 0.0 {
        Verdict::PartialImprovement
    } else if hard_delta < REGRESSION_DELTA {
        Verdict::RegressionDetected
    } else {
        Verdict::NoSignificantChange
    }
}

/// The Phase 3 engine: wraps a diagnostic engine so the after-profile
/// is scored with the same formula constants as the baseline.
#[derive(Debug, Clone, Default)]
pub struct VerificationEngine {
    engine: DiagnosticEngine,
}

impl VerificationEngine {
    /// Create a verification engine with default formula constants.
    pub fn new() -> Self {
        Self {
            engine: DiagnosticEngine::new(),
        }
    }

    /// Create a verification engine sharing an existing diagnostic
    /// engine's configuration.
    pub const fn with_engine(engine: DiagnosticEngine) -> Self {
        Self { engine }
    }

    /// Diff an updated profile against an earlier diagnostic snapshot.
    pub fn verify(&self, before: &DiagnosticResult, after_profile: &Profile) -> VerificationResult {
        let after = self.engine.run(after_profile);

        let deltas = TRACKED_METRICS
            .iter()
            .map(|spec| {
                let before_value = (spec.extract)(before);
                let after_value = (spec.extract)(&after);
                let delta = after_value - before_value;
                MetricDelta {
                    metric: spec.name,
                    before: before_value,
                    after: after_value,
                    delta,
                    status: delta_status(delta, spec.lower_is_better),
                }
            })
            .collect();

        let hard_delta = after.metrics.hard_score - before.metrics.hard_score;
        let verdict = verdict_for(hard_delta);

        tracing::debug!(
            verdict = %verdict,
            hard_delta,
            before_state = %before.state,
            after_state = %after.state,
            "verification complete"
        );

        VerificationResult {
            verdict,
            before_state: before.state,
            after_state: after.state,
            hard_before: before.metrics.hard_score,
            hard_after: after.metrics.hard_score,
            hard_delta,
            deltas,
            after,
            timestamp: Utc::now(),
        }
    }
}
