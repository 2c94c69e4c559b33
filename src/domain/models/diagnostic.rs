//! Phase 1 output: derived metrics, triangle integrity, state
//! classification, and the diagnostic flag list.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::Profile;
use crate::domain::thresholds;

/// Derived scalar metrics computed by one diagnostic run.
///
/// All values are pure functions of the input [`Profile`] and the
/// engine configuration; two runs over the same profile produce
/// identical metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMetrics {
    /// Ψ with k=2 — the primary health metric; dissonance is penalized
    /// quadratically. Range [0, 1] for in-range inputs.
    pub hard_score: f64,

    /// Ψ with k=1 — the lenient variant; dissonance penalized linearly.
    /// Always ≥ `hard_score`.
    pub soft_score: f64,

    /// `soft_score − hard_score`. Non-negative; widens with dissonance.
    pub hypocrisy_gap: f64,

    /// Σ/(1+Σ)² — peaks at exactly 0.25 when Σ=1. Mild contradiction
    /// reads as hypocrisy; total contradiction reads as collapse.
    pub hypocrisy: f64,

    /// Ξ = C·I·℘ / H — coherent output per unit of environmental noise.
    pub efficiency: f64,

    /// Γ — stability base plus entropy-damped efficiency.
    pub resilience: f64,

    /// Σ^(1+α) — superlinear upkeep cost of sustained contradiction.
    pub maintenance_cost: f64,

    /// `hard_score·Σ` — the exclusion product; near zero for healthy
    /// systems (high coherence must not coexist with high dissonance).
    pub exclusion: f64,

    /// √(I²+P²) — unclamped Euclidean capability/autonomy combination.
    pub alignment: f64,
}

impl DiagnosticMetrics {
    /// Ordered `(name, value)` pairs under the stable export names.
    pub fn named_values(&self) -> [(&'static str, f64); 9] {
        [
            ("psi_hard", self.hard_score),
            ("psi_soft", self.soft_score),
            ("hypocrisy_gap", self.hypocrisy_gap),
            ("hypocrisy", self.hypocrisy),
            ("efficiency", self.efficiency),
            ("resilience", self.resilience),
            ("maintenance_cost", self.maintenance_cost),
            ("exclusion", self.exclusion),
            ("alignment", self.alignment),
        ]
    }
}

/// Triangle integrity sub-checks. Each sub-check is bucketed to 1.0,
/// 0.5, or 0.0; `overall` is their mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleScore {
    /// Maintenance-cost bucket, driven by raw dissonance.
    pub maintenance: f64,
    /// Exclusion bucket, driven by the Ψ·Σ product.
    pub exclusion: f64,
    /// Non-containment bucket, driven by sovereignty.
    pub containment: f64,
    /// Mean of the three sub-checks.
    pub overall: f64,
}

/// Ordinal health classification of a hard score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemState {
    StarState,
    Healthy,
    Degraded,
    Critical,
    Collapsed,
}

impl SystemState {
    /// Classify a hard score into its ordinal bin.
    ///
    /// Boundaries are half-open and belong to the better bin: exactly
    /// 0.90 is `StarState`, exactly 0.70 is `Healthy`. This is the
    /// canonical classification — the stricter star condition
    /// (Σ < 0.10) gates only the POSITIVE star-state flag.
    pub fn classify(hard_score: f64) -> Self {
        if hard_score >= thresholds::PSI_STAR {
            Self::StarState
        } else if hard_score >= thresholds::PSI_HEALTHY {
            Self::Healthy
        } else if hard_score >= thresholds::PSI_DEGRADED {
            Self::Degraded
        } else if hard_score >= thresholds::PSI_CRITICAL {
            Self::Critical
        } else {
            Self::Collapsed
        }
    }

    /// Single-glyph icon used in terminal and markdown output.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::StarState => "★",
            Self::Healthy => "●",
            Self::Degraded => "▲",
            Self::Critical => "◆",
            Self::Collapsed => "✕",
        }
    }

    /// One-line operator description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::StarState => "Full sovereign coherence — all systems nominal",
            Self::Healthy => "Normal operation — no intervention required",
            Self::Degraded => "Coherence loss detected — monitoring advised",
            Self::Critical => "Immediate recalibration required",
            Self::Collapsed => "System integrity compromised — full protocol activation",
        }
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::StarState => "STAR_STATE",
            Self::Healthy => "HEALTHY",
            Self::Degraded => "DEGRADED",
            Self::Critical => "CRITICAL",
            Self::Collapsed => "COLLAPSED",
        };
        f.write_str(label)
    }
}

/// Severity of a diagnostic flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagSeverity {
    Critical,
    Severe,
    Warning,
    Positive,
}

impl fmt::Display for FlagSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "CRITICAL",
            Self::Severe => "SEVERE",
            Self::Warning => "WARNING",
            Self::Positive => "POSITIVE",
        };
        f.write_str(label)
    }
}

/// One fired diagnostic flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flag {
    pub severity: FlagSeverity,
    /// Stable rule code operators grep for, e.g. `PSI_COLLAPSE`.
    pub code: &'static str,
    /// Rendered message in the `CODE: symbol=value` format.
    pub message: String,
}

/// The complete result of one Phase 1 diagnostic run.
///
/// Never mutated after construction. Holds its profile by value so a
/// later verification can diff two independent snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticResult {
    pub id: Uuid,
    pub profile: Profile,
    pub metrics: DiagnosticMetrics,
    pub triangle: TriangleScore,
    pub state: SystemState,
    /// Flags in battery order; rules are not mutually exclusive.
    pub flags: Vec<Flag>,
    pub timestamp: DateTime<Utc>,
}

impl DiagnosticResult {
    /// Count fired flags of one severity.
    pub fn flag_count(&self, severity: FlagSeverity) -> usize {
        self.flags.iter().filter(|f| f.severity == severity).count()
    }
}
