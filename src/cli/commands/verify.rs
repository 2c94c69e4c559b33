//! `cohera verify` - Phase 3 before/after comparison.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::render_session_report;
use crate::cli::types::{ReportFormat, VerifyArgs};
use crate::domain::models::{Config, Profile, SessionReport};
use crate::infrastructure::validator::Validator;
use crate::services::{path_selector, DiagnosticEngine, VerificationEngine};

/// Execute the verify command.
pub fn execute(args: VerifyArgs, config: &Config, json: bool) -> Result<()> {
    let before_profile = load_profile(&args.before, config)?;
    let after_profile = load_profile(&args.after, config)?;

    let engine = DiagnosticEngine::with_config(config.engine.clone());
    let baseline = engine.run(&before_profile);
    let verification = VerificationEngine::with_engine(engine).verify(&baseline, &after_profile);

    // Report around the post-recalibration state: its diagnostic, the
    // paths still open after the change, and the delta table.
    let after_diagnostic = verification.after.clone();
    let paths = path_selector::evaluate(&after_diagnostic);
    let report = SessionReport::new(after_diagnostic, paths).with_verification(verification);

    let format = if json { ReportFormat::Json } else { args.format };
    print!("{}", render_session_report(&report, format)?);
    Ok(())
}

fn load_profile(path: &Path, config: &Config) -> Result<Profile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile file {}", path.display()))?;
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("Profile file {} is not a JSON object", path.display()))?;

    let validated = Validator::new()
        .with_engine_config(&config.engine)
        .validate(&map)
        .with_context(|| format!("Invalid profile in {}", path.display()))?;
    for advisory in &validated.advisories {
        tracing::warn!(rule = advisory.rule, "{}", advisory.message);
    }
    Ok(validated.profile)
}
