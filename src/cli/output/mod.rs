//! CLI output rendering: comfy-table views and report format dispatch.

pub mod table;

use anyhow::Result;

use crate::cli::types::ReportFormat;
use crate::domain::models::SessionReport;
use crate::infrastructure::export;

/// Render a session report in the requested format.
pub fn render_session_report(report: &SessionReport, format: ReportFormat) -> Result<String> {
    let rendered = match format {
        ReportFormat::Text => export::text::render_session(report),
        ReportFormat::Json => {
            let mut json = export::json::session_to_json(report, true)?;
            json.push('\n');
            json
        }
        ReportFormat::Markdown => export::markdown::to_markdown(report),
        ReportFormat::Csv => export::csv::to_csv(report, true),
    };
    Ok(rendered)
}
