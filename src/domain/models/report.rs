//! Aggregate of one full diagnostic session, shaped for the exporters.

use serde::Serialize;

use super::diagnostic::DiagnosticResult;
use super::path::PathTrigger;
use super::verification::VerificationResult;

/// Everything a single diagnose→recalibrate→verify session produced.
///
/// Exporters consume this one structure; the verification section is
/// present only when Phase 3 ran.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub diagnostic: DiagnosticResult,
    /// Full annotated path set (not just the triggered subset).
    pub paths: Vec<PathTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationResult>,
}

impl SessionReport {
    pub fn new(diagnostic: DiagnosticResult, paths: Vec<PathTrigger>) -> Self {
        Self {
            diagnostic,
            paths,
            verification: None,
        }
    }

    pub fn with_verification(mut self, verification: VerificationResult) -> Self {
        self.verification = Some(verification);
        self
    }

    /// The triggered subset of the path set.
    pub fn triggered_paths(&self) -> Vec<&PathTrigger> {
        self.paths.iter().filter(|p| p.triggered).collect()
    }
}
