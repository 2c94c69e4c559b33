//! Phase 3 output: per-metric before/after deltas and the overall
//! recalibration verdict.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::diagnostic::{DiagnosticResult, SystemState};

/// Qualitative movement of one tracked metric, already adjusted for
/// polarity (a dissonance drop reports as `Improved`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeltaStatus {
    Improved,
    Regressed,
    Unchanged,
}

impl DeltaStatus {
    /// Direction arrow for terminal output.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Improved => "↑",
            Self::Regressed => "↓",
            Self::Unchanged => "—",
        }
    }
}

impl fmt::Display for DeltaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Improved => "IMPROVED",
            Self::Regressed => "REGRESSED",
            Self::Unchanged => "UNCHANGED",
        };
        f.write_str(label)
    }
}

/// Overall outcome of a verification run, derived from the hard-score
/// delta alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    RecalibrationSuccessful,
    PartialImprovement,
    RegressionDetected,
    NoSignificantChange,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::RecalibrationSuccessful => "RECALIBRATION_SUCCESSFUL",
            Self::PartialImprovement => "PARTIAL_IMPROVEMENT",
            Self::RegressionDetected => "REGRESSION_DETECTED",
            Self::NoSignificantChange => "NO_SIGNIFICANT_CHANGE",
        };
        f.write_str(label)
    }
}

/// Signed before/after movement of one tracked metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricDelta {
    /// Stable metric name, e.g. `psi_hard` or `dissonance`.
    pub metric: &'static str,
    pub before: f64,
    pub after: f64,
    /// `after − before`, unadjusted for polarity.
    pub delta: f64,
    pub status: DeltaStatus,
}

/// The complete result of one Phase 3 verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub verdict: Verdict,
    pub before_state: SystemState,
    pub after_state: SystemState,
    pub hard_before: f64,
    pub hard_after: f64,
    /// `hard_after − hard_before`; sole input to the verdict.
    pub hard_delta: f64,
    /// Fixed 11-metric delta list, in display order.
    pub deltas: Vec<MetricDelta>,
    /// The fresh Phase 1 diagnostic of the updated profile.
    pub after: DiagnosticResult,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_display_matches_wire_format() {
        assert_eq!(
            Verdict::RecalibrationSuccessful.to_string(),
            "RECALIBRATION_SUCCESSFUL"
        );
        let json = serde_json::to_string(&Verdict::NoSignificantChange).unwrap();
        assert_eq!(json, "\"NO_SIGNIFICANT_CHANGE\"");
    }

    #[test]
    fn test_delta_status_arrows() {
        assert_eq!(DeltaStatus::Improved.arrow(), "↑");
        assert_eq!(DeltaStatus::Regressed.arrow(), "↓");
        assert_eq!(DeltaStatus::Unchanged.arrow(), "—");
    }
}
