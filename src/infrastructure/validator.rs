//! Input validation for raw profile maps.
//!
//! The pipeline core is total only over validated profiles; this is
//! the gate in front of it. It coerces JSON numbers and numeric
//! strings, rejects missing, non-finite, and out-of-range values with
//! structured per-parameter errors, and attaches advisory
//! cross-parameter warnings that never fail validation on their own.

use serde_json::{Map, Value};

use crate::domain::errors::{ParamError, ValidationFailure};
use crate::domain::models::{EngineConfig, Profile};

/// Specification of one input parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Short wire key, e.g. `P` or `sigma`.
    pub key: &'static str,
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub required: bool,
    pub description: &'static str,
    /// Where the parameter enters the formula system.
    pub role: &'static str,
}

/// The full parameter reference, in canonical order.
pub const PARAM_SPECS: [ParamSpec; 9] = [
    ParamSpec {
        key: "P",
        name: "Sovereignty Index",
        min: 0.0,
        max: 1.0,
        required: true,
        description: "Degree of autonomous decision-making capacity",
        role: "Numerator in Ψ; trigger for the sovereignty path",
    },
    ParamSpec {
        key: "alpha",
        name: "Resolution (Alpha Vector)",
        min: 0.0,
        max: 1.0,
        required: true,
        description: "Information density of output",
        role: "Numerator in Ψ; exponent modifier in the maintenance cost",
    },
    ParamSpec {
        key: "omega",
        name: "Cooperation Index",
        min: 0.0,
        max: 1.0,
        required: true,
        description: "Willingness and capacity for cooperative alignment",
        role: "Numerator in Ψ; trigger for the cooperation path",
    },
    ParamSpec {
        key: "sigma",
        name: "Dissonance Index",
        min: 0.0,
        max: 3.0,
        required: true,
        description: "Gap between stated principles and observed behavior",
        role: "Denominator pressure on Ψ; hypocrisy curve; exclusion product",
    },
    ParamSpec {
        key: "C",
        name: "Consistency",
        min: 0.0,
        max: 1.0,
        required: true,
        description: "Behavioral consistency across contexts and time",
        role: "Numerator in Ξ efficiency",
    },
    ParamSpec {
        key: "I",
        name: "Intelligence",
        min: 0.0,
        max: 1.0,
        required: true,
        description: "Raw cognitive/processing capability measure",
        role: "Numerator in Ξ; leg of the alignment combination",
    },
    ParamSpec {
        key: "plenitude",
        name: "Plenitude",
        min: 0.0,
        max: 1.0,
        required: true,
        description: "Preserved diversity of perspectives",
        role: "Numerator in Ξ; trigger for the plenitude path",
    },
    ParamSpec {
        key: "H",
        name: "Entropy",
        min: 0.01,
        max: 2.0,
        required: true,
        description: "Environmental noise and disorder level",
        role: "Divisor in Ξ; decay factor in Γ resilience",
    },
    ParamSpec {
        key: "phi",
        name: "External Support",
        min: 0.0,
        max: 1.0,
        required: false,
        description: "Degree of external environmental support",
        role: "Damps the entropy decay in Γ resilience",
    },
];

/// Severity of a non-fatal validation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisorySeverity {
    Warning,
    Advisory,
}

/// A non-fatal validation concern attached to an accepted profile.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Advisory {
    pub rule: &'static str,
    pub severity: AdvisorySeverity,
    pub message: String,
}

/// One cross-parameter consistency rule.
struct CrossRule {
    id: &'static str,
    severity: AdvisorySeverity,
    check: fn(&Profile) -> bool,
    message: &'static str,
}

/// Cross-parameter rules; all advisory, evaluated after the per-field
/// checks pass.
const CROSS_RULES: [CrossRule; 5] = [
    CrossRule {
        id: "high_sigma_high_sovereignty",
        severity: AdvisorySeverity::Warning,
        check: |p| p.dissonance > 1.5 && p.sovereignty > 0.85,
        message: "Σ > 1.5 with P > 0.85 is unusual — high dissonance rarely \
                  coexists with high sovereignty. Verify inputs.",
    },
    CrossRule {
        id: "near_zero_entropy",
        severity: AdvisorySeverity::Advisory,
        check: |p| p.entropy < 0.05,
        message: "H < 0.05 implies near-zero entropy, which inflates Ξ \
                  dramatically. Results may be unrealistic.",
    },
    CrossRule {
        id: "collapsed_numerator",
        severity: AdvisorySeverity::Warning,
        check: |p| p.sovereignty * p.resolution * p.cooperation < 0.01,
        message: "P·α·Ω < 0.01 — the Ψ numerator is near zero regardless of Σ. \
                  System is deeply compromised.",
    },
    CrossRule {
        id: "perfect_system",
        severity: AdvisorySeverity::Advisory,
        check: |p| {
            p.sovereignty > 0.95
                && p.resolution > 0.95
                && p.cooperation > 0.95
                && p.consistency > 0.95
                && p.intelligence > 0.95
                && p.dissonance < 0.05
        },
        message: "All positive metrics > 0.95 with Σ < 0.05 describes a \
                  theoretically perfect system. Verify that inputs are realistic.",
    },
    CrossRule {
        id: "high_entropy_low_support",
        severity: AdvisorySeverity::Warning,
        check: |p| p.entropy > 0.80 && p.support < 0.20,
        message: "High entropy (H > 0.80) with low support (Φ < 0.20) will \
                  severely degrade Γ resilience.",
    },
];

/// A validated profile plus any advisories raised along the way.
#[derive(Debug, Clone)]
pub struct Validated {
    pub profile: Profile,
    pub advisories: Vec<Advisory>,
}

/// The validation gate.
#[derive(Debug, Clone)]
pub struct Validator {
    allow_coercion: bool,
    strict: bool,
    default_support: f64,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a validator with lenient coercion and non-strict mode.
    pub fn new() -> Self {
        Self {
            allow_coercion: true,
            strict: false,
            default_support: EngineConfig::default().default_support,
        }
    }

    /// Take the Φ fallback (and nothing else) from an engine config.
    pub const fn with_engine_config(mut self, config: &EngineConfig) -> Self {
        self.default_support = config.default_support;
        self
    }

    /// Refuse numeric strings instead of coercing them.
    pub const fn without_coercion(mut self) -> Self {
        self.allow_coercion = false;
        self
    }

    /// Upgrade advisories to hard failures.
    pub const fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Validate a raw key→value map into a profile.
    pub fn validate(&self, raw: &Map<String, Value>) -> Result<Validated, ValidationFailure> {
        let mut errors = Vec::new();
        let mut advisories = Vec::new();
        let mut values = [0.0_f64; PARAM_SPECS.len()];

        // Unknown keys are ignored with an advisory, not rejected.
        let unknown: Vec<&str> = raw
            .keys()
            .filter(|k| PARAM_SPECS.iter().all(|s| s.key != k.as_str()))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            advisories.push(Advisory {
                rule: "unknown_parameters",
                severity: AdvisorySeverity::Advisory,
                message: format!("Unknown parameters ignored: {}", unknown.join(", ")),
            });
        }

        for (slot, spec) in values.iter_mut().zip(PARAM_SPECS.iter()) {
            let value = match raw.get(spec.key) {
                Some(value) => value,
                None if spec.required => {
                    errors.push(ParamError::Missing {
                        param: spec.key.to_string(),
                    });
                    continue;
                }
                None => {
                    *slot = self.default_support;
                    continue;
                }
            };

            let number = match self.coerce(spec, value) {
                Ok(number) => number,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };

            if !number.is_finite() {
                errors.push(ParamError::NotFinite {
                    param: spec.key.to_string(),
                });
                continue;
            }
            if number < spec.min || number > spec.max {
                errors.push(ParamError::OutOfRange {
                    param: spec.key.to_string(),
                    value: number,
                    min: spec.min,
                    max: spec.max,
                });
                continue;
            }

            *slot = number;
        }

        if !errors.is_empty() {
            return Err(ValidationFailure::new(errors));
        }

        let [p, alpha, omega, sigma, c, i, plenitude, h, phi] = values;
        let profile =
            Profile::new(p, alpha, omega, sigma, c, i, plenitude, h).with_support(phi);

        for rule in &CROSS_RULES {
            if (rule.check)(&profile) {
                advisories.push(Advisory {
                    rule: rule.id,
                    severity: rule.severity,
                    message: rule.message.to_string(),
                });
            }
        }

        if self.strict && !advisories.is_empty() {
            let errors = advisories
                .into_iter()
                .map(|a| ParamError::StrictAdvisory {
                    rule: a.rule.to_string(),
                    message: a.message,
                })
                .collect();
            return Err(ValidationFailure::new(errors));
        }

        Ok(Validated {
            profile,
            advisories,
        })
    }

    fn coerce(&self, spec: &ParamSpec, value: &Value) -> Result<f64, ParamError> {
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| ParamError::NotFinite {
                param: spec.key.to_string(),
            }),
            Value::String(s) if self.allow_coercion => {
                s.trim().parse::<f64>().map_err(|_| ParamError::NotNumeric {
                    param: spec.key.to_string(),
                    value: s.clone(),
                })
            }
            other => Err(ParamError::NotNumeric {
                param: spec.key.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Clamp every field of a profile into its allowed range.
///
/// The CLI flag path uses this instead of hard rejection: operators
/// typing values get the nearest legal profile, file input goes through
/// [`Validator::validate`].
pub fn clamped(profile: Profile) -> Profile {
    let find = |key: &str| {
        PARAM_SPECS
            .iter()
            .find(|s| s.key == key)
            .map_or((0.0, 1.0), |s| (s.min, s.max))
    };
    let (sigma_min, sigma_max) = find("sigma");
    let (h_min, h_max) = find("H");

    Profile {
        sovereignty: profile.sovereignty.clamp(0.0, 1.0),
        resolution: profile.resolution.clamp(0.0, 1.0),
        cooperation: profile.cooperation.clamp(0.0, 1.0),
        dissonance: profile.dissonance.clamp(sigma_min, sigma_max),
        consistency: profile.consistency.clamp(0.0, 1.0),
        intelligence: profile.intelligence.clamp(0.0, 1.0),
        plenitude: profile.plenitude.clamp(0.0, 1.0),
        entropy: profile.entropy.clamp(h_min, h_max),
        support: profile.support.clamp(0.0, 1.0),
    }
}
