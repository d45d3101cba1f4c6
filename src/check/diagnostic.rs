//! Diagnostic types produced by the default-import check.

use std::fmt;
use std::path::PathBuf;

/// A default-style import found by the host syntax walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOccurrence {
    /// The local binding name (`Card` in `import Card from './Widget'`)
    pub local: String,
    /// The module specifier as written
    pub specifier: String,
    /// Absolute path of the importing file
    pub file: PathBuf,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl ImportOccurrence {
    pub fn new(
        local: impl Into<String>,
        specifier: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            local: local.into(),
            specifier: specifier.into(),
            file: file.into(),
            line: 1,
            column: 1,
        }
    }

    /// Set the source position of the occurrence.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }
}

/// Why a module was flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No default export, but the module has these named exports.
    NoDefaultWithAlternatives(Vec<String>),
    /// No default export and no named exports either.
    NoDefaultNoAlternatives,
}

impl DiagnosticKind {
    /// Stable identifier for this kind of diagnostic.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::NoDefaultWithAlternatives(_) => "no-default-export-with-alternatives",
            DiagnosticKind::NoDefaultNoAlternatives => "no-default-export",
        }
    }

    /// Named exports offered as alternatives, if any.
    pub fn alternatives(&self) -> &[String] {
        match self {
            DiagnosticKind::NoDefaultWithAlternatives(names) => names,
            DiagnosticKind::NoDefaultNoAlternatives => &[],
        }
    }
}

/// A default import of a module that has no default export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub occurrence: ImportOccurrence,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic, choosing the kind from the available named exports.
    pub fn missing_default(occurrence: ImportOccurrence, named_exports: Vec<String>) -> Self {
        let kind = if named_exports.is_empty() {
            DiagnosticKind::NoDefaultNoAlternatives
        } else {
            DiagnosticKind::NoDefaultWithAlternatives(named_exports)
        };
        let message = render_message(&occurrence.local, &kind);
        Self {
            occurrence,
            kind,
            message,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}: {}",
            self.occurrence.file.display(),
            self.occurrence.line,
            self.occurrence.column,
            self.code(),
            self.message
        )
    }
}

fn render_message(local: &str, kind: &DiagnosticKind) -> String {
    match kind {
        DiagnosticKind::NoDefaultWithAlternatives(names) => format!(
            "`{}` is imported as a default import, but the module has no default export. Available named exports: {}",
            local,
            names.join(", ")
        ),
        DiagnosticKind::NoDefaultNoAlternatives => format!(
            "`{}` is imported as a default import, but the module has no default export",
            local
        ),
    }
}
