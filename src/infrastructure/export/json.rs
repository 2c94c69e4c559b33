//! Machine-readable JSON reports, full precision.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{BatchReport, SessionReport};

/// Protocol header stamped onto every JSON report.
#[derive(Debug, Serialize)]
struct ProtocolMeta {
    name: &'static str,
    version: &'static str,
    generated: DateTime<Utc>,
}

impl ProtocolMeta {
    fn current() -> Self {
        Self {
            name: "cohera",
            version: env!("CARGO_PKG_VERSION"),
            generated: Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    #[serde(rename = "_protocol")]
    protocol: ProtocolMeta,
    #[serde(flatten)]
    body: &'a T,
}

fn render<T: Serialize>(body: &T, pretty: bool) -> serde_json::Result<String> {
    let envelope = Envelope {
        protocol: ProtocolMeta::current(),
        body,
    };
    if pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    }
}

/// Export one diagnostic session as JSON.
pub fn session_to_json(report: &SessionReport, pretty: bool) -> serde_json::Result<String> {
    render(report, pretty)
}

/// Export a batch report as JSON.
pub fn batch_to_json(report: &BatchReport, pretty: bool) -> serde_json::Result<String> {
    render(report, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Profile;
    use crate::services::{path_selector, BatchRunner, DiagnosticEngine};

    fn sample_session() -> SessionReport {
        let diagnostic =
            DiagnosticEngine::new().run(&Profile::new(0.8, 0.8, 0.8, 0.3, 0.8, 0.8, 0.85, 0.4));
        let paths = path_selector::evaluate(&diagnostic);
        SessionReport::new(diagnostic, paths)
    }

    #[test]
    fn test_session_json_has_protocol_and_body() {
        let json = session_to_json(&sample_session(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["_protocol"]["name"], "cohera");
        assert!(value["diagnostic"]["metrics"]["psi_hard"].is_f64());
        assert_eq!(value["paths"].as_array().unwrap().len(), 6);
        assert!(value.get("verification").is_none());
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = session_to_json(&sample_session(), false).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_batch_json_shape() {
        let report =
            BatchRunner::new().run(&crate::services::batch_runner::demo_profiles());
        let json = batch_to_json(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 4);
        assert_eq!(value["ranking"].as_array().unwrap().len(), 4);
        assert!(value["totals"]["critical"].is_u64());
    }
}
