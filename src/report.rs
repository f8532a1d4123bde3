//! Rendering a [`CostReport`] for humans or machines.
//!
//! The text layout is fixed: eight labelled lines, token counts as integers
//! and dollar amounts rounded to cents. Scripts that scrape the output rely
//! on the labels, so they must not change.

use crate::cost::CostReport;
use std::fmt;
use std::io::{self, Write};

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Eight labelled lines (default).
    #[default]
    Text,
    /// Pretty-printed JSON object with every [`CostReport`] field.
    Json,
}

impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of input tokens: {}", self.input_tokens)?;
        writeln!(
            f,
            "Estimated number of output tokens: {}",
            self.output_tokens
        )?;
        writeln!(f, "Total number of tokens: {}", self.total_tokens)?;
        writeln!(
            f,
            "Price per million input tokens: ${:.2}",
            self.input_price_per_million
        )?;
        writeln!(
            f,
            "Price per million output tokens: ${:.2}",
            self.output_price_per_million
        )?;
        writeln!(f, "Total input cost: ${:.2}", self.input_cost)?;
        writeln!(f, "Total output cost: ${:.2}", self.output_cost)?;
        writeln!(f, "Total cost (input + output): ${:.2}", self.total_cost)
    }
}

/// Render the report as a string in the requested format.
///
/// Both formats end with a newline.
pub fn render(report: &CostReport, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write the rendered report to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &CostReport,
    format: ReportFormat,
) -> io::Result<()> {
    let rendered = render(report, format).map_err(io::Error::other)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()
}
