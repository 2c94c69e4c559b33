//! End-to-end scenarios for the Phase 1 + Phase 2 pipeline.

use cohera::domain::models::{FlagSeverity, Profile, SystemState};
use cohera::services::{path_selector, DiagnosticEngine};

/// High-coherence calibration point: comfortably HEALTHY, nothing to fix.
fn recovered_profile() -> Profile {
    Profile::new(0.95, 0.90, 0.92, 0.05, 0.90, 0.88, 0.95, 0.10)
}

/// Fully degraded calibration point.
fn collapsed_profile() -> Profile {
    Profile::new(0.15, 0.10, 0.15, 3.50, 0.20, 0.15, 0.30, 0.85)
}

#[test]
fn test_recovered_profile_is_healthy_with_nothing_triggered() {
    let diagnostic = DiagnosticEngine::new().run(&recovered_profile());

    // hard = 0.95·0.90·0.92 / 1.05² ≈ 0.7135
    assert!(diagnostic.metrics.hard_score > 0.70);
    assert_eq!(diagnostic.state, SystemState::Healthy);
    assert_eq!(diagnostic.flag_count(FlagSeverity::Critical), 0);
    assert!(diagnostic
        .flags
        .iter()
        .any(|f| f.code == "COHERENT_FLOW"));

    assert!(path_selector::triggered_only(&diagnostic).is_empty());
}

#[test]
fn test_near_perfect_profile_reaches_star_state() {
    let star = Profile::new(0.99, 0.99, 0.99, 0.01, 0.95, 0.95, 0.95, 0.10);
    let diagnostic = DiagnosticEngine::new().run(&star);

    assert!(diagnostic.metrics.hard_score >= 0.90);
    assert_eq!(diagnostic.state, SystemState::StarState);
    assert!(diagnostic.flags.iter().any(|f| f.code == "STAR_STATE"));
    assert!(path_selector::triggered_only(&diagnostic).is_empty());
}

#[test]
fn test_collapsed_profile_triggers_many_paths() {
    let diagnostic = DiagnosticEngine::new().run(&collapsed_profile());

    assert_eq!(diagnostic.state, SystemState::Collapsed);
    assert!(diagnostic.flag_count(FlagSeverity::Critical) >= 2);

    let triggered = path_selector::triggered_only(&diagnostic);
    assert!(
        triggered.len() >= 3,
        "collapsed system should open at least 3 paths, got {}",
        triggered.len()
    );
}

#[test]
fn test_exclusion_product_near_zero_for_healthy_system() {
    let diagnostic = DiagnosticEngine::new().run(&recovered_profile());
    assert!(diagnostic.metrics.exclusion < 0.10);
}

#[test]
fn test_all_zero_profile_collapses_without_panicking() {
    let zero = Profile::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let diagnostic = DiagnosticEngine::new().run(&zero);

    assert_eq!(diagnostic.state, SystemState::Collapsed);
    assert!(diagnostic.metrics.efficiency.is_finite());
    assert!(diagnostic.metrics.resilience.is_finite());
    assert!(diagnostic.metrics.maintenance_cost.is_finite());
}

#[test]
fn test_all_one_profile_scores_exactly_one_quarter() {
    let one = Profile::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
    let diagnostic = DiagnosticEngine::new().run(&one);

    assert!((diagnostic.metrics.hard_score - 0.25).abs() < 1e-12);
    assert_eq!(diagnostic.state, SystemState::Critical);
}

#[test]
fn test_pipeline_is_idempotent_modulo_identity() {
    let engine = DiagnosticEngine::new();
    let profile = collapsed_profile();

    let first = engine.run(&profile);
    let second = engine.run(&profile);

    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.flags, second.flags);
    assert_eq!(first.state, second.state);
    assert_eq!(first.triangle, second.triangle);

    let first_paths = path_selector::evaluate(&first);
    let second_paths = path_selector::evaluate(&second);
    for (a, b) in first_paths.iter().zip(second_paths.iter()) {
        assert_eq!(a.definition.id, b.definition.id);
        assert_eq!(a.triggered, b.triggered);
        assert_eq!(a.observed, b.observed);
    }
}

#[test]
fn test_soft_score_dominates_hard_across_spectrum() {
    let engine = DiagnosticEngine::new();
    for profile in [
        recovered_profile(),
        collapsed_profile(),
        Profile::new(0.55, 0.50, 0.60, 0.80, 0.60, 0.55, 0.70, 0.40),
        Profile::new(0.30, 0.25, 0.35, 1.80, 0.40, 0.35, 0.50, 0.60),
    ] {
        let diagnostic = engine.run(&profile);
        assert!(diagnostic.metrics.soft_score >= diagnostic.metrics.hard_score);
        assert!(diagnostic.metrics.hypocrisy_gap >= 0.0);
    }
}

#[test]
fn test_flag_battery_can_fire_multiple_severities_at_once() {
    // Deeply dissonant but sovereign: collapse, explosion, and the
    // hypocrisy warning all fire together.
    let profile = Profile::new(0.9, 0.9, 0.9, 2.5, 0.8, 0.8, 0.85, 0.4);
    let diagnostic = DiagnosticEngine::new().run(&profile);

    let codes: Vec<_> = diagnostic.flags.iter().map(|f| f.code).collect();
    assert!(codes.contains(&"PSI_COLLAPSE"));
    assert!(codes.contains(&"SIGMA_EXPLOSION"));
    assert!(codes.contains(&"CBH_UNSTABLE"));
}
