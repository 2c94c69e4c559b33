//! Domain models: profiles in, diagnostic/verification structures out.

pub mod batch;
pub mod config;
pub mod diagnostic;
pub mod path;
pub mod profile;
pub mod report;
pub mod verification;

pub use batch::{BatchEntry, BatchReport, NamedProfile, SeverityTotals};
pub use config::{Config, EngineConfig, LoggingConfig};
pub use diagnostic::{
    DiagnosticMetrics, DiagnosticResult, Flag, FlagSeverity, SystemState, TriangleScore,
};
pub use path::{Comparison, PathDefinition, PathTrigger, WatchedSignal, PATH_DEFINITIONS};
pub use profile::{Profile, DEFAULT_SUPPORT};
pub use report::SessionReport;
pub use verification::{DeltaStatus, MetricDelta, VerificationResult, Verdict};
