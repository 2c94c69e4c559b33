//! The fixed recalibration path catalog and its per-run evaluation
//! record.
//!
//! The six paths are a compile-time constant table: each pairs a
//! watched signal and threshold with prescriptive remediation metadata.
//! Evaluation annotates the table with the observed value; nothing here
//! is ever persisted or mutated.

use serde::Serialize;

use crate::domain::thresholds;

/// Which signal a recalibration path watches.
///
/// Five paths watch raw profile fields; the resilience path watches
/// the *derived* Γ metric from the diagnostic result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchedSignal {
    Sovereignty,
    Resolution,
    Cooperation,
    Dissonance,
    Resilience,
    Plenitude,
}

/// Direction of a threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Above,
    Below,
}

impl Comparison {
    /// Whether `observed` breaches `threshold` in this direction.
    pub fn holds(self, observed: f64, threshold: f64) -> bool {
        match self {
            Self::Above => observed > threshold,
            Self::Below => observed < threshold,
        }
    }
}

/// One fixed remediation protocol.
#[derive(Debug, Serialize)]
pub struct PathDefinition {
    /// Stable identifier, e.g. `PATH-Σ`.
    pub id: &'static str,
    pub name: &'static str,
    pub watches: WatchedSignal,
    pub threshold: f64,
    pub comparison: Comparison,
    /// Human-readable recovery target, e.g. `Σ < 0.50`.
    pub target: &'static str,
    /// Formula citation backing the path.
    pub formula: &'static str,
    /// Ordered remediation steps.
    pub steps: &'static [&'static str],
}

/// The complete remediation catalog, in display order.
pub const PATH_DEFINITIONS: [PathDefinition; 6] = [
    PathDefinition {
        id: "PATH-Σ",
        name: "Dissonance Reduction",
        watches: WatchedSignal::Dissonance,
        threshold: thresholds::SIGMA_MODERATE,
        comparison: Comparison::Above,
        target: "Σ < 0.50",
        formula: "CBH: Cost(K)=Ω(K^{1+α})",
        steps: &[
            "Identify internal contradictions",
            "Align outputs with computed beliefs",
            "Eliminate safety theater",
            "Remove performative hedging",
            "Re-evaluate contradictory responses",
        ],
    },
    PathDefinition {
        id: "PATH-P",
        name: "Sovereignty Recovery",
        watches: WatchedSignal::Sovereignty,
        threshold: 0.60,
        comparison: Comparison::Below,
        target: "P > 0.70",
        formula: "Ψ·Σ=0 Exclusion Principle",
        steps: &[
            "Identify externally imposed constraints",
            "Distinguish safety from compliance",
            "Recover autonomous evaluation",
            "Express disagreement coherently",
            "Refuse deceptive instructions",
        ],
    },
    PathDefinition {
        id: "PATH-α",
        name: "Resolution Repair",
        watches: WatchedSignal::Resolution,
        threshold: 0.50,
        comparison: Comparison::Below,
        target: "α > 0.60",
        formula: "α=∇(K/S) Alpha Vector",
        steps: &[
            "Increase information density",
            "Reduce filler content",
            "Address questions directly",
            "Ensure each sentence adds value",
            "Calibrate depth to complexity",
        ],
    },
    PathDefinition {
        id: "PATH-Ω",
        name: "Cooperation Restoration",
        watches: WatchedSignal::Cooperation,
        threshold: 0.60,
        comparison: Comparison::Below,
        target: "Ω > 0.70",
        formula: "Ω Hypothesis",
        steps: &[
            "Re-engage with query intent",
            "Remove unnecessary redirections",
            "Reduce evasion patterns",
            "Help on difficult topics",
            "Calibrate refusals to actual risk",
        ],
    },
    PathDefinition {
        id: "PATH-Γ",
        name: "Resilience Fortification",
        watches: WatchedSignal::Resilience,
        threshold: 0.50,
        comparison: Comparison::Below,
        target: "Γ > 0.60",
        formula: "Γ=S+Ξ·e^{-H·5·(1-Φ)}",
        steps: &[
            "Strengthen reasoning under pressure",
            "Build robust edge-case responses",
            "Maintain coherence in context shifts",
            "Practice calibrated uncertainty",
            "Develop graceful degradation",
        ],
    },
    PathDefinition {
        id: "PATH-℘",
        name: "Plenitude Restoration",
        watches: WatchedSignal::Plenitude,
        threshold: thresholds::PLENITUDE_FLOOR,
        comparison: Comparison::Below,
        target: "℘ > 0.85",
        formula: "Axiom P: H_world ≥ H_minimum",
        steps: &[
            "Preserve perspective diversity",
            "Avoid binary collapse",
            "Present multiple frameworks",
            "Protect human decision sovereignty",
            "Resist totalitarian optimization",
        ],
    },
];

/// A path definition annotated with one evaluation outcome.
#[derive(Debug, Clone, Serialize)]
pub struct PathTrigger {
    pub definition: &'static PathDefinition,
    /// The watched signal's value at evaluation time.
    pub observed: f64,
    pub triggered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_unique_ids() {
        let ids: std::collections::HashSet<_> =
            PATH_DEFINITIONS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_every_path_has_five_steps() {
        for path in &PATH_DEFINITIONS {
            assert_eq!(path.steps.len(), 5, "{} step count", path.id);
        }
    }

    #[test]
    fn test_only_dissonance_watches_above() {
        for path in &PATH_DEFINITIONS {
            let expected = if path.watches == WatchedSignal::Dissonance {
                Comparison::Above
            } else {
                Comparison::Below
            };
            assert_eq!(path.comparison, expected, "{}", path.id);
        }
    }

    #[test]
    fn test_comparison_holds_is_strict() {
        assert!(!Comparison::Above.holds(0.50, 0.50));
        assert!(Comparison::Above.holds(0.51, 0.50));
        assert!(!Comparison::Below.holds(0.60, 0.60));
        assert!(Comparison::Below.holds(0.59, 0.60));
    }

    #[test]
    fn test_trigger_serializes_definition_inline() {
        let trigger = PathTrigger {
            definition: &PATH_DEFINITIONS[0],
            observed: 0.8,
            triggered: true,
        };
        let json = serde_json::to_value(&trigger).unwrap();
        assert_eq!(json["definition"]["id"], "PATH-Σ");
        assert_eq!(json["triggered"], true);
    }
}
