//! Decision policy for a single default-import occurrence.
//!
//! Each occurrence goes through scope filtering, resolution, file-type
//! filtering and export extraction, and ends in exactly one
//! [`CheckOutcome`]. Nothing here fails: anything that cannot be
//! determined ends in [`CheckOutcome::Skipped`] or is read as "no exports".

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::diagnostic::{Diagnostic, ImportOccurrence};
use super::filter::{is_checkable_file_type, is_out_of_scope};
use super::resolve::{resolve, ResolvedTarget};
use super::surface::ExportSurface;

/// Why an occurrence was not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Package import or asset import.
    OutOfScope,
    /// No file exists for the specifier.
    Unresolved,
    /// The resolved file is not a JavaScript/TypeScript source.
    UncheckableFileType,
}

/// Terminal state of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Skipped(SkipReason),
    Clean,
    Flagged(Diagnostic),
}

impl CheckOutcome {
    /// Consume the outcome, keeping only a reported diagnostic.
    pub fn into_diagnostic(self) -> Option<Diagnostic> {
        match self {
            CheckOutcome::Flagged(diag) => Some(diag),
            _ => None,
        }
    }
}

/// Supplies export surfaces for resolved module paths.
pub trait SurfaceSource {
    fn surface(&mut self, path: &Path) -> ExportSurface;
}

/// Reads the file again on every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct FreshSurfaces;

impl SurfaceSource for FreshSurfaces {
    fn surface(&mut self, path: &Path) -> ExportSurface {
        ExportSurface::from_path(path)
    }
}

/// Memoizes export surfaces by resolved path.
///
/// A cache must only live for one analysis pass; file contents can change
/// between passes.
#[derive(Debug, Default)]
pub struct SurfaceCache {
    entries: HashMap<PathBuf, ExportSurface>,
}

impl SurfaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SurfaceSource for SurfaceCache {
    fn surface(&mut self, path: &Path) -> ExportSurface {
        self.entries
            .entry(path.to_path_buf())
            .or_insert_with(|| ExportSurface::from_path(path))
            .clone()
    }
}

/// Run the full check for one occurrence.
pub fn evaluate<S: SurfaceSource + ?Sized>(
    occurrence: &ImportOccurrence,
    surfaces: &mut S,
) -> CheckOutcome {
    let outcome = decide(occurrence, surfaces);
    match &outcome {
        CheckOutcome::Skipped(reason) => tracing::debug!(
            local = %occurrence.local,
            specifier = %occurrence.specifier,
            ?reason,
            "skipped default import"
        ),
        CheckOutcome::Clean => tracing::debug!(
            local = %occurrence.local,
            specifier = %occurrence.specifier,
            "default export found"
        ),
        CheckOutcome::Flagged(diag) => tracing::debug!(
            local = %occurrence.local,
            specifier = %occurrence.specifier,
            code = diag.code(),
            "missing default export"
        ),
    }
    outcome
}

fn decide<S: SurfaceSource + ?Sized>(
    occurrence: &ImportOccurrence,
    surfaces: &mut S,
) -> CheckOutcome {
    if is_out_of_scope(&occurrence.specifier) {
        return CheckOutcome::Skipped(SkipReason::OutOfScope);
    }

    let path = match resolve(&occurrence.specifier, &occurrence.file) {
        ResolvedTarget::Resolved(path) => path,
        ResolvedTarget::Unresolved => return CheckOutcome::Skipped(SkipReason::Unresolved),
    };

    if !is_checkable_file_type(&path) {
        return CheckOutcome::Skipped(SkipReason::UncheckableFileType);
    }

    let surface = surfaces.surface(&path);
    if surface.has_default {
        return CheckOutcome::Clean;
    }

    CheckOutcome::Flagged(Diagnostic::missing_default(
        occurrence.clone(),
        surface.named_exports,
    ))
}

/// Check one occurrence with fresh file reads, returning a diagnostic if it is flagged.
pub fn check_default_import(occurrence: &ImportOccurrence) -> Option<Diagnostic> {
    evaluate(occurrence, &mut FreshSurfaces).into_diagnostic()
}
