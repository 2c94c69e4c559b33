//! `cohera diagnose` - Phase 1 scoring plus Phase 2 path selection.

use std::fs;

use anyhow::{Context, Result};

use crate::cli::output::render_session_report;
use crate::cli::types::{DiagnoseArgs, ReportFormat};
use crate::domain::models::{Config, Profile, SessionReport};
use crate::infrastructure::validator::{self, Validator};
use crate::services::{path_selector, DiagnosticEngine};

/// Execute the diagnose command.
pub fn execute(args: DiagnoseArgs, config: &Config, json: bool) -> Result<()> {
    let profile = load_profile(&args, config)?;

    let engine = DiagnosticEngine::with_config(config.engine.clone());
    let diagnostic = engine.run(&profile);
    let paths = if args.no_paths {
        Vec::new()
    } else {
        path_selector::evaluate(&diagnostic)
    };
    let report = SessionReport::new(diagnostic, paths);

    let format = if json { ReportFormat::Json } else { args.format };
    print!("{}", render_session_report(&report, format)?);
    Ok(())
}

/// Resolve the profile: file input goes through the validator, flag
/// input is clamped into range.
fn load_profile(args: &DiagnoseArgs, config: &Config) -> Result<Profile> {
    if let Some(path) = &args.profile {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
            .with_context(|| format!("Profile file {} is not a JSON object", path.display()))?;

        let validated = Validator::new()
            .with_engine_config(&config.engine)
            .validate(&map)?;
        for advisory in &validated.advisories {
            tracing::warn!(rule = advisory.rule, "{}", advisory.message);
        }
        return Ok(validated.profile);
    }

    Ok(validator::clamped(Profile {
        sovereignty: args.sovereignty,
        resolution: args.resolution,
        cooperation: args.cooperation,
        dissonance: args.dissonance,
        consistency: args.consistency,
        intelligence: args.intelligence,
        plenitude: args.plenitude,
        entropy: args.entropy,
        support: args.support,
    }))
}
