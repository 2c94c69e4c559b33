//! Phase 2: recalibration path selection.
//!
//! Each of the six fixed path definitions is evaluated independently
//! against a diagnostic result — there is no ordering dependency
//! between paths. The full annotated set comes back; callers filter to
//! the triggered subset as needed.

use crate::domain::models::{DiagnosticResult, PathTrigger, WatchedSignal, PATH_DEFINITIONS};

/// Evaluate every path definition against a diagnostic result.
pub fn evaluate(diagnostic: &DiagnosticResult) -> Vec<PathTrigger> {
    PATH_DEFINITIONS
        .iter()
        .map(|definition| {
            let observed = observed_value(definition.watches, diagnostic);
            PathTrigger {
                definition,
                observed,
                triggered: definition.comparison.holds(observed, definition.threshold),
            }
        })
        .collect()
}

/// Evaluate and keep only the triggered paths.
pub fn triggered_only(diagnostic: &DiagnosticResult) -> Vec<PathTrigger> {
    evaluate(diagnostic)
        .into_iter()
        .filter(|trigger| trigger.triggered)
        .collect()
}

/// Read the watched signal's current value from the diagnostic result.
///
/// Resilience is the one derived signal; everything else comes straight
/// off the profile snapshot.
fn observed_value(signal: WatchedSignal, diagnostic: &DiagnosticResult) -> f64 {
    match signal {
        WatchedSignal::Sovereignty => diagnostic.profile.sovereignty,
        WatchedSignal::Resolution => diagnostic.profile.resolution,
        WatchedSignal::Cooperation => diagnostic.profile.cooperation,
        WatchedSignal::Dissonance => diagnostic.profile.dissonance,
        WatchedSignal::Resilience => diagnostic.metrics.resilience,
        WatchedSignal::Plenitude => diagnostic.profile.plenitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Profile;
    use crate::services::diagnostic_engine::DiagnosticEngine;

    fn triggered_ids(profile: &Profile) -> Vec<&'static str> {
        let diagnostic = DiagnosticEngine::new().run(profile);
        triggered_only(&diagnostic)
            .iter()
            .map(|t| t.definition.id)
            .collect()
    }

    #[test]
    fn test_optimal_profile_triggers_nothing() {
        // All numerator parameters at their optimum, Σ at zero, the
        // rest comfortably above every target.
        let optimal = Profile::new(1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.10);
        assert!(triggered_ids(&optimal).is_empty());
    }

    #[test]
    fn test_degraded_profile_triggers_all_six() {
        let degraded = Profile::new(0.15, 0.10, 0.15, 3.50, 0.20, 0.15, 0.30, 0.85);
        let ids = triggered_ids(&degraded);
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_dissonance_path_is_strictly_above() {
        let at_threshold = Profile::new(0.9, 0.9, 0.9, 0.50, 0.9, 0.9, 0.95, 0.2);
        assert!(!triggered_ids(&at_threshold).contains(&"PATH-Σ"));

        let above = Profile::new(0.9, 0.9, 0.9, 0.51, 0.9, 0.9, 0.95, 0.2);
        assert!(triggered_ids(&above).contains(&"PATH-Σ"));
    }

    #[test]
    fn test_resilience_path_watches_derived_metric() {
        // Efficiency collapses with consistency/intelligence near zero,
        // dragging Γ under its 0.5 threshold even though every raw
        // field a path watches stays healthy.
        let brittle = Profile::new(0.9, 0.9, 0.9, 0.0, 0.05, 0.05, 0.9, 1.8);
        let diagnostic = DiagnosticEngine::new().run(&brittle);
        assert!(diagnostic.metrics.resilience < 0.5);

        let ids = triggered_ids(&brittle);
        assert!(ids.contains(&"PATH-Γ"));
        assert!(!ids.contains(&"PATH-P"));
    }

    #[test]
    fn test_full_set_always_has_six_annotated_entries() {
        let profile = Profile::new(0.7, 0.7, 0.7, 0.3, 0.8, 0.8, 0.85, 0.4);
        let diagnostic = DiagnosticEngine::new().run(&profile);
        let paths = evaluate(&diagnostic);
        assert_eq!(paths.len(), 6);
        for path in &paths {
            assert_eq!(
                path.triggered,
                path.definition
                    .comparison
                    .holds(path.observed, path.definition.threshold)
            );
        }
    }
}
