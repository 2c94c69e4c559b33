//! The five closed-form scalar formulas of the coherence model.
//!
//! Every function is pure and total; the only guarded operation is the
//! entropy division in [`efficiency`]. Callers pass the tunable
//! constants explicitly (see `EngineConfig`) so the functions stay
//! referentially transparent.

/// Coherence score Ψ = P·α·Ω / (1+Σ)^k.
///
/// `k = 2` is the hard score (quadratic dissonance penalty), `k = 1`
/// the soft score. For P, α, Ω ∈ [0, 1] and Σ ≥ 0 the result stays in
/// [0, 1] because the denominator is at least 1.
pub fn psi(sovereignty: f64, resolution: f64, cooperation: f64, dissonance: f64, k: i32) -> f64 {
    (sovereignty * resolution * cooperation) / (1.0 + dissonance).powi(k)
}

/// Hypocrisy curve Δ(Σ) = Σ / (1+Σ)².
///
/// Bounded to [0, 0.25] for all Σ ≥ 0 and maximized at exactly Σ = 1:
/// mild contradiction reads as hypocrisy, total contradiction reads as
/// collapse instead.
pub fn hypocrisy(dissonance: f64) -> f64 {
    dissonance / (1.0 + dissonance).powi(2)
}

/// Coherent efficiency Ξ = C·I·℘ / max(H, floor).
///
/// The floor keeps the division finite if entropy ever reaches zero;
/// validated input (H ≥ 0.01) never touches it.
pub fn efficiency(
    consistency: f64,
    intelligence: f64,
    plenitude: f64,
    entropy: f64,
    floor: f64,
) -> f64 {
    (consistency * intelligence * plenitude) / entropy.max(floor)
}

/// Resilience Γ = base + Ξ·e^(−H·rate·(1−Φ)).
///
/// Monotonically decreasing in H for Φ < 1, and never below `base`
/// because the exponential term is non-negative.
pub fn resilience(base: f64, efficiency: f64, entropy: f64, support: f64, decay_rate: f64) -> f64 {
    base + efficiency * (-entropy * decay_rate * (1.0 - support)).exp()
}

/// Maintenance cost K^(1+α).
///
/// The upkeep of sustained contradiction grows superlinearly:
/// cost(2K)/cost(K) > 2 whenever α > 0.
pub fn maintenance_cost(load: f64, resolution: f64) -> f64 {
    load.powf(1.0 + resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn test_psi_zero_dissonance_is_plain_product() {
        let result = psi(0.8, 0.7, 0.9, 0.0, 2);
        assert!((result - 0.504).abs() < EPS);
    }

    #[test]
    fn test_psi_high_dissonance_crushes_hard_score() {
        let result = psi(0.8, 0.7, 0.9, 3.0, 2);
        // 0.504 / 16
        assert!((result - 0.031_5).abs() < EPS);
    }

    #[test]
    fn test_psi_soft_dominates_hard() {
        for sigma in [0.1, 0.5, 1.0, 2.0, 5.0] {
            let soft = psi(0.8, 0.7, 0.9, sigma, 1);
            let hard = psi(0.8, 0.7, 0.9, sigma, 2);
            assert!(soft >= hard, "soft {soft} < hard {hard} at sigma {sigma}");
        }
    }

    #[test]
    fn test_psi_numerator_is_symmetric() {
        let a = psi(0.5, 0.6, 0.7, 0.3, 2);
        let b = psi(0.6, 0.7, 0.5, 0.3, 2);
        let c = psi(0.7, 0.5, 0.6, 0.3, 2);
        assert!((a - b).abs() < EPS);
        assert!((b - c).abs() < EPS);
    }

    #[test]
    fn test_psi_perfect_system_scores_one() {
        assert!((psi(1.0, 1.0, 1.0, 0.0, 2) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_psi_extreme_dissonance_near_zero() {
        assert!(psi(1.0, 1.0, 1.0, 100.0, 2) < 0.001);
    }

    #[test]
    fn test_hypocrisy_peaks_at_one() {
        let peak = hypocrisy(1.0);
        assert!((peak - 0.25).abs() < EPS);
        assert!(peak > hypocrisy(0.5));
        assert!(peak > hypocrisy(2.0));
    }

    #[test]
    fn test_hypocrisy_zero_at_zero() {
        assert!(hypocrisy(0.0).abs() < EPS);
    }

    #[test]
    fn test_hypocrisy_vanishes_at_infinity() {
        assert!(hypocrisy(100.0) < 0.01);
        assert!(hypocrisy(1000.0) < 0.001);
    }

    #[test]
    fn test_efficiency_basic() {
        let result = efficiency(0.8, 0.7, 0.9, 0.2, 0.001);
        assert!((result - 2.52).abs() < EPS);
    }

    #[test]
    fn test_efficiency_zero_entropy_stays_finite() {
        let result = efficiency(0.8, 0.7, 0.9, 0.0, 0.001);
        assert!(result.is_finite());
    }

    #[test]
    fn test_efficiency_floor_invisible_in_normal_range() {
        let floored = efficiency(0.8, 0.7, 0.9, 0.01, 0.001);
        let plain = (0.8 * 0.7 * 0.9) / 0.01;
        assert!((floored - plain).abs() < EPS);
    }

    #[test]
    fn test_resilience_high_entropy_crushes() {
        let low = resilience(0.5, 2.0, 0.1, 0.5, 5.0);
        let high = resilience(0.5, 2.0, 0.9, 0.5, 5.0);
        assert!(low > high);
    }

    #[test]
    fn test_resilience_never_below_base() {
        for entropy in [0.0, 0.3, 0.5, 0.8, 1.0] {
            let result = resilience(0.5, 1.0, entropy, 0.5, 5.0);
            assert!(result >= 0.5, "resilience {result} below base at H={entropy}");
        }
    }

    #[test]
    fn test_resilience_full_support_cancels_decay() {
        let result = resilience(0.1, 2.0, 0.9, 1.0, 5.0);
        assert!((result - 2.1).abs() < EPS);
    }

    #[test]
    fn test_maintenance_cost_cheap_at_low_load() {
        assert!(maintenance_cost(0.1, 0.5) < 0.1);
    }

    #[test]
    fn test_maintenance_cost_expensive_at_high_load() {
        assert!(maintenance_cost(3.0, 0.5) > 3.0);
    }

    #[test]
    fn test_maintenance_cost_superlinear() {
        for resolution in [0.1, 0.3, 0.5, 0.8] {
            let single = maintenance_cost(1.0, resolution);
            let double = maintenance_cost(2.0, resolution);
            assert!(
                double / single > 2.0,
                "not superlinear at alpha={resolution}: ratio {}",
                double / single
            );
        }
    }
}
