//! CLI layer: clap types, command implementations, and output
//! rendering.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{BatchArgs, Cli, Commands, DiagnoseArgs, ReportFormat, VerifyArgs};

use console::style;

/// Print a top-level command error and exit with a failing status.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        println!("{payload}");
    } else {
        eprintln!("{} {err:#}", style("error:").red().bold());
    }
    std::process::exit(1);
}
