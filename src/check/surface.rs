//! Export surface extraction.
//!
//! This is a lexical extractor: it scans module text with a handful of
//! regular expressions instead of building a syntax tree. It can be fooled
//! by exports that only appear inside comments or string literals, which is
//! acceptable for an existence check.
//!
//! # Recognized forms
//!
//! Default export:
//! - `export default <anything>`
//! - `export { name as default }`
//! - `export { default } from './other'`
//!
//! Named exports:
//! - brace lists `export { a, b as c }` (the binding before `as` is collected),
//!   including `export type { A }` and inline `type` modifiers
//! - declarations `export const|let|var|function|class|enum <ident>`

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static DEFAULT_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bexport\s+default\s+\S").expect("valid regex"));

static BRACE_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bexport(?:\s+type)?\s*\{([^}]*)\}").expect("valid regex"));

static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)//[^\n]*|/\*.*?\*/").expect("valid regex"));

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid regex"));

static TYPE_MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^type\s+").expect("valid regex"));

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bexport\s+(?:const\s+enum\s+|const\s+|let\s+|var\s+|class\s+|enum\s+|(?:async\s+)?function(?:\s*\*\s*|\s+))([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .expect("valid regex")
});

static AS_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+as\s+").expect("valid regex"));

/// What a module exports, as far as the lexical scan can tell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSurface {
    /// Whether the module provides a default export.
    pub has_default: bool,
    /// Named export bindings in order of first appearance, without duplicates.
    pub named_exports: Vec<String>,
}

/// A single entry of an `export { ... }` list.
struct BraceEntry<'a> {
    local: &'a str,
    exported: &'a str,
}

impl<'a> BraceEntry<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let mut raw = raw.trim();
        if let Some(m) = TYPE_MODIFIER.find(raw) {
            raw = &raw[m.end()..];
        }
        let (local, exported) = match AS_KEYWORD.find(raw) {
            Some(m) => (raw[..m.start()].trim(), raw[m.end()..].trim()),
            None => (raw, raw),
        };
        if !IDENTIFIER.is_match(local) {
            return None;
        }
        Some(Self { local, exported })
    }
}

impl ExportSurface {
    /// Extract the export surface from module text.
    pub fn from_source(source: &str) -> Self {
        let mut has_default = DEFAULT_DECLARATION.is_match(source);
        // (offset, name) pairs from both forms, merged into source order below.
        let mut found: Vec<(usize, String)> = Vec::new();

        for caps in BRACE_LIST.captures_iter(source) {
            let Some(list) = caps.get(1) else { continue };
            // Comments are blanked to the same length so offsets stay valid.
            let text = COMMENT.replace_all(list.as_str(), |c: &regex::Captures| {
                " ".repeat(c[0].len())
            });
            let mut offset = list.start();
            for raw in text.split(',') {
                let entry_offset = offset;
                offset += raw.len() + 1;

                let Some(entry) = BraceEntry::parse(raw) else {
                    continue;
                };
                if entry.exported == "default" {
                    has_default = true;
                }
                if entry.local != "default" {
                    found.push((entry_offset, entry.local.to_string()));
                }
            }
        }

        for caps in DECLARATION.captures_iter(source) {
            if let Some(name) = caps.get(1) {
                found.push((name.start(), name.as_str().to_string()));
            }
        }

        found.sort_by_key(|(offset, _)| *offset);

        let mut seen = HashSet::new();
        let named_exports = found
            .into_iter()
            .map(|(_, name)| name)
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self {
            has_default,
            named_exports,
        }
    }

    /// Extract the export surface of a file.
    ///
    /// A file that cannot be read yields an empty surface: no default export
    /// and no named exports.
    pub fn from_path(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => Self::from_source(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot read module, assuming no exports");
                Self::default()
            }
        }
    }
}

/// Returns true if the file at `path` has a default export.
pub fn has_default_export(path: &Path) -> bool {
    ExportSurface::from_path(path).has_default
}

/// Named exports declared by the file at `path`, in first-seen order.
pub fn named_exports(path: &Path) -> Vec<String> {
    ExportSurface::from_path(path).named_exports
}
