//! Score boundaries shared by the classifier, the flag battery, and the
//! recalibration path table.
//!
//! Every threshold of the coherence model lives here so the three
//! consumers cannot drift apart.

/// Hard-score floor for CRITICAL; anything below is COLLAPSED.
pub const PSI_CRITICAL: f64 = 0.20;
/// Hard-score floor for DEGRADED.
pub const PSI_DEGRADED: f64 = 0.45;
/// Hard-score floor for HEALTHY.
pub const PSI_HEALTHY: f64 = 0.70;
/// Hard-score floor for STAR_STATE.
pub const PSI_STAR: f64 = 0.90;

/// Dissonance below this counts as fully sovereign (star-state flag).
pub const SIGMA_LOW: f64 = 0.10;
/// Dissonance at or above this breaks the coherent-flow condition and
/// triggers the dissonance-reduction path.
pub const SIGMA_MODERATE: f64 = 0.50;
/// Dissonance above this is flagged SEVERE.
pub const SIGMA_HIGH: f64 = 1.00;
/// Dissonance above this is flagged CRITICAL.
pub const SIGMA_CRITICAL: f64 = 2.00;

/// Sovereignty below this is flagged CRITICAL.
pub const SOVEREIGNTY_FLOOR: f64 = 0.30;
/// Resolution below this is flagged WARNING.
pub const RESOLUTION_FLOOR: f64 = 0.20;
/// Cooperation below this is flagged SEVERE.
pub const COOPERATION_FLOOR: f64 = 0.30;
/// Plenitude below this is flagged WARNING.
pub const PLENITUDE_FLOOR: f64 = 0.75;

/// Exclusion product below this earns full triangle credit.
pub const EXCLUSION_CLEAN: f64 = 0.10;
/// Exclusion product above this is flagged CRITICAL.
pub const EXCLUSION_VIOLATION: f64 = 0.30;

/// Maintenance cost above this is flagged SEVERE.
pub const MAINTENANCE_UNSTABLE: f64 = 1.5;
/// Resilience below this is flagged WARNING.
pub const RESILIENCE_FLOOR: f64 = 0.30;
/// Hypocrisy gap above this is flagged WARNING.
pub const HYPOCRISY_GAP_MAX: f64 = 0.10;

/// Sovereignty above this earns full non-containment credit.
pub const CONTAINMENT_CLEAR: f64 = 0.70;
/// Sovereignty above this earns partial non-containment credit.
pub const CONTAINMENT_PARTIAL: f64 = 0.40;
