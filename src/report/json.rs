//! JSON output implementation.
//!
//! Writes check results in JSON format for machine-readable output.

use super::Reporter;
use crate::project::ProjectReport;
use serde::Serialize;
use std::io::{self, Write};

/// JSON reporter implementation.
pub struct JsonReporter;

/// Serializable diagnostic for JSON output.
#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    file: String,
    line: usize,
    column: usize,
    local: &'a str,
    specifier: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternatives: Option<&'a [String]>,
    message: &'a str,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    files_checked: usize,
    files_failed: usize,
    problems: usize,
}

/// Root JSON structure.
#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    summary: JsonSummary,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

impl Reporter for JsonReporter {
    fn render<W: Write>(&self, report: &ProjectReport, writer: &mut W) -> io::Result<()> {
        let diagnostics = report
            .diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                code: d.code(),
                file: d.occurrence.file.display().to_string(),
                line: d.occurrence.line,
                column: d.occurrence.column,
                local: &d.occurrence.local,
                specifier: &d.occurrence.specifier,
                alternatives: Some(d.kind.alternatives()).filter(|names| !names.is_empty()),
                message: &d.message,
            })
            .collect();

        let output = JsonReport {
            root: report.root.display().to_string(),
            summary: JsonSummary {
                files_checked: report.files_checked,
                files_failed: report.files_failed,
                problems: report.diagnostics.len(),
            },
            diagnostics,
        };

        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
