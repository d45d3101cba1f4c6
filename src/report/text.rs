//! Plain text output.

use std::io::{self, Write};

use super::Reporter;
use crate::project::ProjectReport;

/// Text reporter implementation.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn render<W: Write>(&self, report: &ProjectReport, writer: &mut W) -> io::Result<()> {
        for diag in &report.diagnostics {
            writeln!(writer, "{}", diag)?;
        }

        let problems = report.diagnostics.len();
        write!(
            writer,
            "{} {} in {} {}",
            problems,
            if problems == 1 { "problem" } else { "problems" },
            report.files_checked,
            if report.files_checked == 1 { "file" } else { "files" },
        )?;
        if report.files_failed > 0 {
            write!(writer, " ({} could not be analyzed)", report.files_failed)?;
        }
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Diagnostic, ImportOccurrence};

    fn render(report: &ProjectReport) -> String {
        let mut output = Vec::new();
        TextReporter.render(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_lists_each_diagnostic() {
        let report = ProjectReport {
            files_checked: 2,
            diagnostics: vec![
                Diagnostic::missing_default(
                    ImportOccurrence::new("Card", "./Widget", "/p/App.jsx").at(2, 8),
                    vec!["Widget".to_string()],
                ),
                Diagnostic::missing_default(
                    ImportOccurrence::new("Y", "./Empty", "/p/App.jsx").at(5, 8),
                    Vec::new(),
                ),
            ],
            ..ProjectReport::default()
        };

        let text = render(&report);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("/p/App.jsx:2:8: no-default-export-with-alternatives: `Card`"));
        assert!(lines[1].starts_with("/p/App.jsx:5:8: no-default-export: `Y`"));
        assert_eq!(lines[2], "2 problems in 2 files");
    }

    #[test]
    fn test_text_summary_mentions_failures() {
        let report = ProjectReport {
            files_checked: 1,
            files_failed: 3,
            ..ProjectReport::default()
        };

        assert_eq!(render(&report), "0 problems in 1 file (3 could not be analyzed)\n");
    }
}
