//! Batch scoring models: named input profiles and the comparative
//! report aggregated across them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diagnostic::{DiagnosticResult, FlagSeverity};
use super::path::PathTrigger;
use super::profile::Profile;

/// A profile with a display name, as loaded from a batch file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedProfile {
    pub name: String,
    /// Batch files may use either `profile` or the legacy `inputs` key.
    #[serde(alias = "inputs")]
    pub profile: Profile,
}

/// One scored entry of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub name: String,
    pub diagnostic: DiagnosticResult,
    pub paths: Vec<PathTrigger>,
    pub triggered_count: usize,
}

/// Flag counts accumulated across a batch, keyed by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityTotals {
    pub critical: usize,
    pub severe: usize,
    pub warning: usize,
    pub positive: usize,
}

impl SeverityTotals {
    /// Count one fired flag.
    pub fn record(&mut self, severity: FlagSeverity) {
        match severity {
            FlagSeverity::Critical => self.critical += 1,
            FlagSeverity::Severe => self.severe += 1,
            FlagSeverity::Warning => self.warning += 1,
            FlagSeverity::Positive => self.positive += 1,
        }
    }
}

/// Comparative report over a batch of named profiles.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    /// Entries in input order.
    pub entries: Vec<BatchEntry>,
    /// Entry names ordered by hard score, best first.
    pub ranking: Vec<String>,
    pub totals: SeverityTotals,
}
