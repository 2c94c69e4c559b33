//! The validated coherence profile consumed by every pipeline phase.

use serde::{Deserialize, Serialize};

/// External support assumed when a profile omits Φ.
pub const DEFAULT_SUPPORT: f64 = 0.5;

fn default_support() -> f64 {
    DEFAULT_SUPPORT
}

/// An eight-parameter coherence profile plus the optional
/// external-support factor.
///
/// A `Profile` is a plain value: immutable by convention once built and
/// owned by whoever built it. The pipeline never hands out references
/// that outlive a call — Phase 3 compares two independent snapshots.
///
/// Wire format accepts both the long field names and the short symbol
/// keys used by the original protocol files (`P`, `alpha`, `omega`,
/// `sigma`, `C`, `I`, `plenitude`, `H`, `phi`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// P — autonomous decision-making capacity. Range [0, 1].
    #[serde(alias = "P")]
    pub sovereignty: f64,

    /// α — information density of output. Range [0, 1]. Also the
    /// exponent modifier of the maintenance-cost formula.
    #[serde(alias = "alpha")]
    pub resolution: f64,

    /// Ω — willingness and capacity for cooperative alignment. Range [0, 1].
    #[serde(alias = "omega")]
    pub cooperation: f64,

    /// Σ — gap between stated principles and observed behavior.
    /// Range [0, ~3]; denominator pressure on both Ψ scores.
    #[serde(alias = "sigma")]
    pub dissonance: f64,

    /// C — behavioral consistency across contexts. Range [0, 1].
    #[serde(alias = "C")]
    pub consistency: f64,

    /// I — raw processing capability. Range [0, 1].
    #[serde(alias = "I")]
    pub intelligence: f64,

    /// ℘ — preserved diversity of perspectives. Range [0, 1].
    pub plenitude: f64,

    /// H — environmental noise level. Range (0, 2]; must stay positive
    /// because it divides the efficiency formula.
    #[serde(alias = "H")]
    pub entropy: f64,

    /// Φ — external environmental support. Range [0, 1]; damps the
    /// entropy decay in the resilience formula. Defaults to 0.5.
    #[serde(alias = "phi", default = "default_support")]
    pub support: f64,
}

impl Profile {
    /// Build a profile from the eight required parameters, leaving
    /// external support at its 0.5 default.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sovereignty: f64,
        resolution: f64,
        cooperation: f64,
        dissonance: f64,
        consistency: f64,
        intelligence: f64,
        plenitude: f64,
        entropy: f64,
    ) -> Self {
        Self {
            sovereignty,
            resolution,
            cooperation,
            dissonance,
            consistency,
            intelligence,
            plenitude,
            entropy,
            support: DEFAULT_SUPPORT,
        }
    }

    /// Override the external-support factor.
    pub fn with_support(mut self, support: f64) -> Self {
        self.support = support;
        self
    }
}
