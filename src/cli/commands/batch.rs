//! `cohera batch` - score many named profiles and rank them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde::Deserialize;

use crate::cli::output::table::batch_table;
use crate::cli::types::BatchArgs;
use crate::domain::models::{Config, NamedProfile};
use crate::infrastructure::export::json::batch_to_json;
use crate::infrastructure::validator::Validator;
use crate::services::batch_runner::{demo_profiles, BatchRunner};
use crate::services::DiagnosticEngine;

/// One entry of a batch file before validation.
#[derive(Debug, Deserialize)]
struct RawNamedProfile {
    name: String,
    #[serde(alias = "profile")]
    inputs: serde_json::Map<String, serde_json::Value>,
}

/// Execute the batch command.
pub fn execute(args: BatchArgs, config: &Config, json: bool) -> Result<()> {
    let profiles = if args.demo {
        demo_profiles()
    } else {
        load_profiles(&args.files, config)?
    };

    let engine = DiagnosticEngine::with_config(config.engine.clone());
    let report = BatchRunner::with_engine(engine).run(&profiles);

    if let Some(path) = &args.output {
        let rendered = batch_to_json(&report, true)?;
        fs::write(path, rendered)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if !json {
            eprintln!(
                "{} report written to {}",
                style("✓").green(),
                path.display()
            );
        }
    }

    if json {
        println!("{}", batch_to_json(&report, true)?);
    } else {
        println!("{}", batch_table(&report));
        println!(
            "  flags: {} critical, {} severe, {} warning, {} positive",
            report.totals.critical,
            report.totals.severe,
            report.totals.warning,
            report.totals.positive
        );
    }
    Ok(())
}

/// Load and validate every profile from the given batch files.
fn load_profiles(files: &[impl AsRef<Path>], config: &Config) -> Result<Vec<NamedProfile>> {
    let validator = Validator::new().with_engine_config(&config.engine);
    let mut profiles = Vec::new();

    for file in files {
        let path = file.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch file {}", path.display()))?;
        let entries: Vec<RawNamedProfile> = serde_json::from_str(&raw)
            .with_context(|| format!("Batch file {} is not a JSON array", path.display()))?;

        for entry in entries {
            let validated = validator
                .validate(&entry.inputs)
                .with_context(|| format!("Invalid profile \"{}\" in {}", entry.name, path.display()))?;
            for advisory in &validated.advisories {
                tracing::warn!(profile = %entry.name, rule = advisory.rule, "{}", advisory.message);
            }
            profiles.push(NamedProfile {
                name: entry.name,
                profile: validated.profile,
            });
        }
    }

    Ok(profiles)
}
