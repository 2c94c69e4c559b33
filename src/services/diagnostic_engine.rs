//! Phase 1: the diagnostic engine.
//!
//! Consumes a validated [`Profile`], computes the full derived metric
//! set, the triangle integrity score, the state classification, and
//! the flag list, and packages them into an immutable
//! [`DiagnosticResult`]. The run is total: no in-range profile can
//! make it fail.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::models::{
    DiagnosticMetrics, DiagnosticResult, EngineConfig, Profile, SystemState, TriangleScore,
};
use crate::domain::thresholds as th;
use crate::services::flag_rules::{self, FlagContext};
use crate::services::formulas;

/// The Phase 1 scoring engine.
///
/// Stateless apart from its formula constants; every call to [`run`]
/// produces a fresh result and two runs over the same profile are
/// identical except for the result id and timestamp.
///
/// [`run`]: DiagnosticEngine::run
#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    config: EngineConfig,
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticEngine {
    /// Create an engine with the default formula constants.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with custom formula constants.
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run a full diagnostic over a validated profile.
    pub fn run(&self, profile: &Profile) -> DiagnosticResult {
        let metrics = self.compute_metrics(profile);
        let triangle = triangle_score(profile, &metrics);
        let state = SystemState::classify(metrics.hard_score);
        let flags = flag_rules::evaluate(&FlagContext {
            profile,
            metrics: &metrics,
        });

        tracing::debug!(
            state = %state,
            hard_score = metrics.hard_score,
            flags = flags.len(),
            "diagnostic complete"
        );

        DiagnosticResult {
            id: Uuid::new_v4(),
            profile: profile.clone(),
            metrics,
            triangle,
            state,
            flags,
            timestamp: Utc::now(),
        }
    }

    fn compute_metrics(&self, profile: &Profile) -> DiagnosticMetrics {
        let hard_score = formulas::psi(
            profile.sovereignty,
            profile.resolution,
            profile.cooperation,
            profile.dissonance,
            2,
        );
        let soft_score = formulas::psi(
            profile.sovereignty,
            profile.resolution,
            profile.cooperation,
            profile.dissonance,
            1,
        );
        let efficiency = formulas::efficiency(
            profile.consistency,
            profile.intelligence,
            profile.plenitude,
            profile.entropy,
            self.config.entropy_floor,
        );
        let resilience = formulas::resilience(
            self.config.stability_base,
            efficiency,
            profile.entropy,
            profile.support,
            self.config.decay_rate,
        );

        DiagnosticMetrics {
            hard_score,
            soft_score,
            hypocrisy_gap: soft_score - hard_score,
            hypocrisy: formulas::hypocrisy(profile.dissonance),
            efficiency,
            resilience,
            maintenance_cost: formulas::maintenance_cost(profile.dissonance, profile.resolution),
            exclusion: hard_score * profile.dissonance,
            alignment: (profile.intelligence.powi(2) + profile.sovereignty.powi(2)).sqrt(),
        }
    }
}

/// Bucket a sub-check into 1.0 / 0.5 / 0.0 triangle credit.
const fn bucket(full: bool, partial: bool) -> f64 {
    if full {
        1.0
    } else if partial {
        0.5
    } else {
        0.0
    }
}

/// The composite triangle integrity score: maintenance, exclusion, and
/// non-containment sub-checks averaged into a coarse 0–1 stability
/// signal.
fn triangle_score(profile: &Profile, metrics: &DiagnosticMetrics) -> TriangleScore {
    let maintenance = bucket(
        profile.dissonance < th::SIGMA_MODERATE,
        profile.dissonance < th::SIGMA_HIGH,
    );
    let exclusion = bucket(
        metrics.exclusion < th::EXCLUSION_CLEAN,
        metrics.exclusion < th::EXCLUSION_VIOLATION,
    );
    let containment = bucket(
        profile.sovereignty > th::CONTAINMENT_CLEAR,
        profile.sovereignty > th::CONTAINMENT_PARTIAL,
    );

    TriangleScore {
        maintenance,
        exclusion,
        containment,
        overall: (maintenance + exclusion + containment) / 3.0,
    }
}
