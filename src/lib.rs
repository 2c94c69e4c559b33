//! Cohera - Coherence Diagnostic and Recalibration Engine
//!
//! Cohera scores an eight-parameter coherence profile, classifies it
//! into one of five ordinal health states, selects applicable
//! remediation paths from a fixed catalog, and verifies whether a
//! follow-up profile improved or regressed the score.
//!
//! # Architecture
//!
//! The crate follows a layered layout:
//!
//! - **Domain Layer** (`domain`): models, errors, and threshold constants
//! - **Service Layer** (`services`): the three pipeline phases as pure computation
//! - **Infrastructure Layer** (`infrastructure`): validation, configuration, export
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use cohera::domain::models::Profile;
//! use cohera::services::{path_selector, DiagnosticEngine};
//!
//! let profile = Profile::new(0.85, 0.80, 0.90, 0.20, 0.88, 0.92, 0.90, 0.30);
//! let diagnostic = DiagnosticEngine::new().run(&profile);
//! let triggered = path_selector::triggered_only(&diagnostic);
//! println!("{} ({} paths open)", diagnostic.state, triggered.len());
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    BatchReport, Config, DiagnosticMetrics, DiagnosticResult, EngineConfig, Flag, FlagSeverity,
    LoggingConfig, NamedProfile, PathDefinition, PathTrigger, Profile, SessionReport, SystemState,
    TriangleScore, VerificationResult, Verdict,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::validator::Validator;
pub use services::{BatchRunner, DiagnosticEngine, VerificationEngine};
