//! Table output formatting for CLI commands
//!
//! Provides formatted table output for batch comparisons and the
//! parameter reference using comfy-table. Supports color-coded cells
//! with a plain fallback when the terminal has no color support.

use std::env;

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::models::{BatchReport, SystemState};
use crate::infrastructure::validator::PARAM_SPECS;

/// Whether the current terminal supports colored output.
fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    env::var_os("TERM").is_some_and(|term| term != "dumb")
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

const fn state_color(state: SystemState) -> Color {
    match state {
        SystemState::StarState | SystemState::Healthy => Color::Green,
        SystemState::Degraded => Color::Yellow,
        SystemState::Critical => Color::DarkYellow,
        SystemState::Collapsed => Color::Red,
    }
}

/// Format a batch report as a comparative table, best ranked first.
pub fn batch_table(report: &BatchReport) -> String {
    let use_colors = supports_color();
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("System").add_attribute(Attribute::Bold),
        Cell::new("State").add_attribute(Attribute::Bold),
        Cell::new("Ψ hard").add_attribute(Attribute::Bold),
        Cell::new("Σ").add_attribute(Attribute::Bold),
        Cell::new("Flags").add_attribute(Attribute::Bold),
        Cell::new("Paths").add_attribute(Attribute::Bold),
    ]);

    for (rank, name) in report.ranking.iter().enumerate() {
        let Some(entry) = report.entries.iter().find(|e| &e.name == name) else {
            continue;
        };
        let diagnostic = &entry.diagnostic;

        let state_cell = if use_colors {
            Cell::new(diagnostic.state.to_string()).fg(state_color(diagnostic.state))
        } else {
            Cell::new(format!("{} {}", diagnostic.state.icon(), diagnostic.state))
        };

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&entry.name),
            state_cell,
            Cell::new(format!("{:.4}", diagnostic.metrics.hard_score)),
            Cell::new(format!("{:.2}", diagnostic.profile.dissonance)),
            Cell::new(diagnostic.flags.len()),
            Cell::new(entry.triggered_count),
        ]);
    }

    table.to_string()
}

/// Format the parameter reference as a table.
pub fn params_table() -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Range").add_attribute(Attribute::Bold),
        Cell::new("Required").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for spec in &PARAM_SPECS {
        table.add_row(vec![
            Cell::new(spec.key),
            Cell::new(spec.name),
            Cell::new(format!("[{}, {}]", spec.min, spec.max)),
            Cell::new(if spec.required { "yes" } else { "no" }),
            Cell::new(spec.description),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::batch_runner::{demo_profiles, BatchRunner};

    #[test]
    fn test_batch_table_lists_every_entry() {
        let report = BatchRunner::new().run(&demo_profiles());
        let rendered = batch_table(&report);
        for entry in &report.entries {
            assert!(rendered.contains(&entry.name), "missing {}", entry.name);
        }
    }

    #[test]
    fn test_params_table_lists_every_spec() {
        let rendered = params_table();
        for spec in &PARAM_SPECS {
            assert!(rendered.contains(spec.key), "missing {}", spec.key);
        }
    }
}
