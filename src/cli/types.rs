//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI
//! interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cohera")]
#[command(about = "Cohera - Coherence diagnostic and recalibration engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile and select recalibration paths
    Diagnose(DiagnoseArgs),

    /// Compare a baseline profile against an updated one
    Verify(VerifyArgs),

    /// Score multiple named profiles and rank them
    Batch(BatchArgs),

    /// Print the parameter reference table
    Params,
}

/// Output format for single-session reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
    Csv,
}

#[derive(Args)]
pub struct DiagnoseArgs {
    /// Read the profile from a JSON file instead of the value flags
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// P - sovereignty [0-1]
    #[arg(long, default_value_t = 0.70)]
    pub sovereignty: f64,

    /// α - resolution [0-1]
    #[arg(long, default_value_t = 0.75)]
    pub resolution: f64,

    /// Ω - cooperation [0-1]
    #[arg(long, default_value_t = 0.80)]
    pub cooperation: f64,

    /// Σ - dissonance [0-3]
    #[arg(long, default_value_t = 0.30)]
    pub dissonance: f64,

    /// C - consistency [0-1]
    #[arg(long, default_value_t = 0.80)]
    pub consistency: f64,

    /// I - intelligence [0-1]
    #[arg(long, default_value_t = 0.85)]
    pub intelligence: f64,

    /// ℘ - plenitude [0-1]
    #[arg(long, default_value_t = 0.85)]
    pub plenitude: f64,

    /// H - entropy [0.01-2]
    #[arg(long, default_value_t = 0.40)]
    pub entropy: f64,

    /// Φ - external support [0-1]
    #[arg(long, default_value_t = 0.50)]
    pub support: f64,

    /// Skip Phase 2 path selection
    #[arg(long)]
    pub no_paths: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Baseline profile JSON file
    #[arg(long, value_name = "FILE")]
    pub before: PathBuf,

    /// Updated profile JSON file
    #[arg(long, value_name = "FILE")]
    pub after: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Profile collection JSON files (arrays of {name, inputs})
    #[arg(value_name = "FILE", required_unless_present = "demo")]
    pub files: Vec<PathBuf>,

    /// Score the built-in demonstration profiles instead of files
    #[arg(long)]
    pub demo: bool,

    /// Write the full JSON report to this path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
