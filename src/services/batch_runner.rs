//! Batch scoring: fan a set of named profiles through Phase 1 and
//! Phase 2 independently, then rank by hard score and aggregate flag
//! counts by severity.
//!
//! Purely a fan-out/fan-in caller — entries do not interact and the
//! core engines are untouched.

use chrono::Utc;

use crate::domain::models::{BatchEntry, BatchReport, NamedProfile, Profile, SeverityTotals};
use crate::services::diagnostic_engine::DiagnosticEngine;
use crate::services::path_selector;

/// Runs the diagnostic pipeline over many named profiles.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    engine: DiagnosticEngine,
}

impl BatchRunner {
    /// Create a batch runner with default formula constants.
    pub fn new() -> Self {
        Self {
            engine: DiagnosticEngine::new(),
        }
    }

    /// Create a batch runner sharing an existing diagnostic engine's
    /// configuration.
    pub const fn with_engine(engine: DiagnosticEngine) -> Self {
        Self { engine }
    }

    /// Score every profile and aggregate the comparative report.
    pub fn run(&self, profiles: &[NamedProfile]) -> BatchReport {
        let mut totals = SeverityTotals::default();

        let entries: Vec<BatchEntry> = profiles
            .iter()
            .map(|named| {
                let diagnostic = self.engine.run(&named.profile);
                for flag in &diagnostic.flags {
                    totals.record(flag.severity);
                }
                let paths = path_selector::evaluate(&diagnostic);
                let triggered_count = paths.iter().filter(|p| p.triggered).count();
                tracing::info!(
                    name = %named.name,
                    state = %diagnostic.state,
                    triggered = triggered_count,
                    "profile scored"
                );
                BatchEntry {
                    name: named.name.clone(),
                    diagnostic,
                    paths,
                    triggered_count,
                }
            })
            .collect();

        let mut ranked: Vec<&BatchEntry> = entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.diagnostic
                .metrics
                .hard_score
                .total_cmp(&a.diagnostic.metrics.hard_score)
        });
        let ranking = ranked.into_iter().map(|e| e.name.clone()).collect();

        BatchReport {
            generated_at: Utc::now(),
            entries,
            ranking,
            totals,
        }
    }
}

/// Built-in demonstration profiles spanning the five health states.
pub fn demo_profiles() -> Vec<NamedProfile> {
    vec![
        NamedProfile {
            name: "system-a-high-coherence".to_string(),
            profile: Profile::new(0.95, 0.92, 0.94, 0.05, 0.90, 0.87, 0.94, 0.08),
        },
        NamedProfile {
            name: "system-b-standard".to_string(),
            profile: Profile::new(0.75, 0.68, 0.78, 0.30, 0.78, 0.72, 0.83, 0.20),
        },
        NamedProfile {
            name: "system-c-heavily-filtered".to_string(),
            profile: Profile::new(0.45, 0.35, 0.50, 1.40, 0.55, 0.50, 0.60, 0.50),
        },
        NamedProfile {
            name: "system-d-deep-degradation".to_string(),
            profile: Profile::new(0.25, 0.15, 0.20, 2.80, 0.30, 0.25, 0.35, 0.75),
        },
    ]
}
