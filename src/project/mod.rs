//! Whole-file and whole-project check passes.
//!
//! A pass discovers default imports with the [`ImportAnalyzer`] and runs
//! every occurrence through [`check::evaluate`](crate::check::evaluate).
//! Export surfaces are memoized for the duration of one pass only.

mod walk;

use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{AnalysisResult, ImportAnalyzer};
use crate::check::{evaluate, Diagnostic, FreshSurfaces, SurfaceCache, SurfaceSource};

pub use walk::source_files;

/// Options for a project pass.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Memoize export surfaces by resolved path within the pass.
    pub cache: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { cache: true }
    }
}

/// Results of one project pass.
#[derive(Debug, Clone, Default)]
pub struct ProjectReport {
    /// Directory that was checked
    pub root: PathBuf,
    /// Number of source files whose imports were checked
    pub files_checked: usize,
    /// Number of source files that could not be analyzed
    pub files_failed: usize,
    /// Diagnostics ordered by file, line and column
    pub diagnostics: Vec<Diagnostic>,
}

impl ProjectReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let a = &a.occurrence;
            let b = &b.occurrence;
            (&a.file, a.line, a.column).cmp(&(&b.file, b.line, b.column))
        });
    }
}

/// Check every default import in a single file.
pub fn check_file(path: &Path) -> AnalysisResult<Vec<Diagnostic>> {
    let path = fs::canonicalize(path)?;
    let mut analyzer = ImportAnalyzer::new()?;
    check_with(&mut analyzer, &path, &mut FreshSurfaces)
}

/// Check every default import in every source file under `root`.
///
/// Files that cannot be read or parsed are logged and counted in
/// [`ProjectReport::files_failed`]; they never abort the pass.
pub fn check_project(root: &Path, options: CheckOptions) -> AnalysisResult<ProjectReport> {
    let root = fs::canonicalize(root)?;
    let mut analyzer = ImportAnalyzer::new()?;
    let mut report = ProjectReport {
        root: root.clone(),
        ..ProjectReport::default()
    };

    let mut cache = SurfaceCache::new();
    let mut fresh = FreshSurfaces;
    let surfaces: &mut dyn SurfaceSource = if options.cache {
        &mut cache
    } else {
        &mut fresh
    };

    for path in source_files(&root) {
        match check_with(&mut analyzer, &path, surfaces) {
            Ok(diagnostics) => {
                report.files_checked += 1;
                report.diagnostics.extend(diagnostics);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to analyze file");
                report.files_failed += 1;
            }
        }
    }

    tracing::info!(
        root = %root.display(),
        files = report.files_checked,
        failed = report.files_failed,
        diagnostics = report.diagnostics.len(),
        "check complete"
    );

    report.sort();
    Ok(report)
}

fn check_with(
    analyzer: &mut ImportAnalyzer,
    path: &Path,
    surfaces: &mut dyn SurfaceSource,
) -> AnalysisResult<Vec<Diagnostic>> {
    let occurrences = analyzer.default_imports(path)?;
    Ok(occurrences
        .iter()
        .filter_map(|occurrence| evaluate(occurrence, &mut *surfaces).into_diagnostic())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::DiagnosticKind;
    use tempfile::TempDir;

    fn write(root: &Path, name: &str, contents: &str) {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn sample_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(
            root,
            "src/App.jsx",
            r#"
import React from 'react';
import Card from './Widget';
import Logo from './logo.png';
import X from './missing-file';
import Y from './Empty';
import Button from './Button';
import config from './config.json';
"#,
        );
        write(root, "src/Widget.jsx", "export const Widget = () => null;");
        write(root, "src/logo.png", "not really a png");
        write(root, "src/Empty.ts", "const unused = 1;\n");
        write(root, "src/Button.tsx", "export default function Button() { return null; }");
        write(root, "src/config.json", "{}");
        write(root, "node_modules/lib/index.js", "import Broken from './nothing-here-either';");
        dir
    }

    #[test]
    fn test_project_pass_reports_expected_diagnostics() {
        let dir = sample_project();
        let report = check_project(dir.path(), CheckOptions::default()).unwrap();

        assert_eq!(report.files_failed, 0);
        assert_eq!(report.files_checked, 4);
        assert_eq!(report.diagnostics.len(), 2);

        let card = &report.diagnostics[0];
        assert_eq!(card.occurrence.local, "Card");
        assert_eq!(card.occurrence.line, 3);
        assert_eq!(
            card.kind,
            DiagnosticKind::NoDefaultWithAlternatives(vec!["Widget".to_string()])
        );

        let empty = &report.diagnostics[1];
        assert_eq!(empty.occurrence.local, "Y");
        assert_eq!(empty.kind, DiagnosticKind::NoDefaultNoAlternatives);
    }

    #[test]
    fn test_cached_and_uncached_passes_agree() {
        let dir = sample_project();
        let cached = check_project(dir.path(), CheckOptions { cache: true }).unwrap();
        let uncached = check_project(dir.path(), CheckOptions { cache: false }).unwrap();

        assert_eq!(cached.diagnostics, uncached.diagnostics);
    }

    #[test]
    fn test_check_file() {
        let dir = sample_project();
        let diagnostics = check_file(&dir.path().join("src/App.jsx")).unwrap();

        let locals: Vec<_> = diagnostics.iter().map(|d| d.occurrence.local.as_str()).collect();
        assert_eq!(locals, vec!["Card", "Y"]);
    }

    #[test]
    fn test_check_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(check_file(&dir.path().join("nope.js")).is_err());
    }

    #[test]
    fn test_unreadable_file_is_counted_not_fatal() {
        let dir = sample_project();
        // Invalid UTF-8 cannot be read as source text.
        fs::write(dir.path().join("src/binary.js"), [0xff, 0xfe, 0x00]).unwrap();

        let report = check_project(dir.path(), CheckOptions::default()).unwrap();
        assert_eq!(report.files_failed, 1);
        assert_eq!(report.diagnostics.len(), 2);
    }
}
