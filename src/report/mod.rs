//! Rendering of check results.
//!
//! This module provides reporters for writing a [`ProjectReport`] in
//! human-readable text or machine-readable JSON.

pub mod json;
pub mod text;

use std::io::{self, Write};

use crate::project::ProjectReport;

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One line per diagnostic plus a summary
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for reporters.
pub trait Reporter {
    /// Write the report to the given writer.
    fn render<W: Write>(&self, report: &ProjectReport, writer: &mut W) -> io::Result<()>;
}

/// Render a report in the specified format.
pub fn render<W: Write>(
    format: ReportFormat,
    report: &ProjectReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::TextReporter.render(report, writer),
        ReportFormat::Json => json::JsonReporter.render(report, writer),
    }
}

/// Render a report to a string.
pub fn render_to_string(format: ReportFormat, report: &ProjectReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    render(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
