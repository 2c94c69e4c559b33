//! Domain errors for the cohera pipeline.
//!
//! The three scoring phases are total over a validated
//! [`Profile`](crate::domain::models::Profile) and return no errors;
//! everything here belongs to the validation gate in front of them.

use thiserror::Error;

/// One rejected input parameter: which one, what was given, why.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{param}: missing required parameter")]
    Missing { param: String },

    #[error("{param}: expected a numeric value, got {value}")]
    NotNumeric { param: String, value: String },

    #[error("{param}: value must be finite")]
    NotFinite { param: String },

    #[error("{param}: value {value} outside allowed range [{min}, {max}]")]
    OutOfRange {
        param: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{rule}: {message}")]
    StrictAdvisory { rule: String, message: String },
}

impl ParamError {
    /// The parameter (or cross-rule id) this error is attached to.
    pub fn param(&self) -> &str {
        match self {
            Self::Missing { param }
            | Self::NotNumeric { param, .. }
            | Self::NotFinite { param }
            | Self::OutOfRange { param, .. } => param,
            Self::StrictAdvisory { rule, .. } => rule,
        }
    }
}

/// Join individual parameter errors into one summary line.
fn format_param_errors(errors: &[ParamError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Aggregate validation failure carrying every rejected parameter.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} parameter error(s): {}", .errors.len(), format_param_errors(.errors))]
pub struct ValidationFailure {
    pub errors: Vec<ParamError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<ParamError>) -> Self {
        Self { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_error_display_includes_value_and_range() {
        let err = ParamError::OutOfRange {
            param: "H".to_string(),
            value: 5.0,
            min: 0.01,
            max: 2.0,
        };
        let rendered = err.to_string();
        assert!(rendered.contains('H'));
        assert!(rendered.contains('5'));
        assert!(rendered.contains("0.01"));
    }

    #[test]
    fn test_validation_failure_aggregates_count() {
        let failure = ValidationFailure::new(vec![
            ParamError::Missing {
                param: "P".to_string(),
            },
            ParamError::NotFinite {
                param: "sigma".to_string(),
            },
        ]);
        let rendered = failure.to_string();
        assert!(rendered.starts_with("2 parameter error(s)"));
        assert!(rendered.contains("P: missing"));
        assert!(rendered.contains("sigma"));
    }

    #[test]
    fn test_param_accessor() {
        let err = ParamError::Missing {
            param: "omega".to_string(),
        };
        assert_eq!(err.param(), "omega");
    }
}
