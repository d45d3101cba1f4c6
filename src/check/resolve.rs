//! Relative module resolution with extension probing.

use std::path::{Component, Path, PathBuf};

use super::filter::SOURCE_EXTENSIONS;

/// Outcome of resolving an import specifier to a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// The specifier points at an existing file.
    Resolved(PathBuf),
    /// No candidate exists (or the filesystem could not be queried).
    Unresolved,
}

/// Resolve `specifier` relative to the directory containing `from_file`.
///
/// Probes the joined base path as written, then the base path with each of
/// [`SOURCE_EXTENSIONS`] appended. The first candidate that is a regular file
/// wins. Directory indexes (`./Foo/index.ts`) are not consulted, and any I/O
/// failure while probing counts as a miss.
///
/// Specifiers that can only name a directory (`.`, `..`, or a trailing `/`)
/// are unresolved without probing.
pub fn resolve(specifier: &str, from_file: &Path) -> ResolvedTarget {
    if names_directory(specifier) {
        return ResolvedTarget::Unresolved;
    }

    let dir = from_file.parent().unwrap_or_else(|| Path::new(""));
    let base = normalize(&dir.join(specifier));

    for candidate in candidates(&base) {
        tracing::trace!(candidate = %candidate.display(), "probing module candidate");
        if is_regular_file(&candidate) {
            return ResolvedTarget::Resolved(candidate);
        }
    }

    ResolvedTarget::Unresolved
}

fn names_directory(specifier: &str) -> bool {
    specifier == "." || specifier == ".." || specifier.ends_with('/')
}

/// Candidate paths for a base path, in probe order.
fn candidates(base: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    std::iter::once(base.to_path_buf()).chain(SOURCE_EXTENSIONS.iter().map(move |ext| {
        let mut with_ext = base.as_os_str().to_owned();
        with_ext.push(".");
        with_ext.push(ext);
        PathBuf::from(with_ext)
    }))
}

fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Lexically fold `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
