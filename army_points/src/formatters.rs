use crate::error::Result;
use crate::models::PointsReport;
use clap::ValueEnum;

/// Output style for a points report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width columns
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Header with faction and total, then one aligned line per entry.
pub fn format_report(report: &PointsReport) -> String {
    let mut output = format!("{:<16}: {:>29}\n", report.faction, report.total);
    for entry in &report.entries {
        output.push_str(&format!(
            "{:>2} {:<40}{:>4}\n",
            entry.tier, entry.name, entry.cost
        ));
    }
    output
}

pub fn format_report_json(report: &PointsReport) -> Result<String> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

pub fn render(report: &PointsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_report(report)),
        OutputFormat::Json => format_report_json(report),
    }
}
