//! Scope and file-type filtering for default-import checks.
//!
//! Two predicates run around resolution: [`is_out_of_scope`] rejects
//! specifiers before any filesystem access, and [`is_checkable_file_type`]
//! rejects resolved targets this checker cannot read exports from.

use std::path::Path;

/// Source extensions probed during resolution, in probe order.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Extensions of bundler-handled image assets.
const ASSET_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "svg", "ico", "webp"];

/// Directory names whose contents are treated as assets.
const ASSET_DIRECTORIES: [&str; 3] = ["assets", "images", "icons"];

/// Kind of source file the export extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl SourceKind {
    /// Determine the kind from a bare extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" => Some(SourceKind::JavaScript),
            "jsx" => Some(SourceKind::Jsx),
            "ts" => Some(SourceKind::TypeScript),
            "tsx" => Some(SourceKind::Tsx),
            _ => None,
        }
    }

    /// Determine the kind from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Returns true if the specifier is rooted at the importing file's directory.
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

/// Returns true if the specifier names an image asset or lives in an asset directory.
pub fn is_asset_specifier(specifier: &str) -> bool {
    let mut segments: Vec<&str> = specifier.split('/').collect();
    let last = segments.pop().unwrap_or_default();

    let has_asset_extension = last
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            ASSET_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);

    has_asset_extension
        || segments
            .iter()
            .any(|segment| ASSET_DIRECTORIES.contains(segment))
}

/// Returns true if a specifier must not be checked at all.
///
/// Package imports cannot be analyzed by inspecting local files, and asset
/// imports are resolved by the bundler rather than a module export table.
pub fn is_out_of_scope(specifier: &str) -> bool {
    !is_relative_specifier(specifier) || is_asset_specifier(specifier)
}

/// Returns true if a resolved target has one of the recognized source extensions.
pub fn is_checkable_file_type(path: &Path) -> bool {
    SourceKind::from_path(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_specifiers() {
        assert!(is_relative_specifier("./Widget"));
        assert!(is_relative_specifier("../shared/Button"));
        assert!(is_relative_specifier("."));
        assert!(is_relative_specifier(".."));
    }

    #[test]
    fn test_package_specifiers_are_out_of_scope() {
        for spec in ["react", "@tanstack/react-query", "lodash/debounce", "/abs/path", ".hidden"] {
            assert!(is_out_of_scope(spec), "{spec} should be out of scope");
        }
    }

    #[test]
    fn test_asset_extensions() {
        assert!(is_asset_specifier("./logo.png"));
        assert!(is_asset_specifier("./photo.JPEG"));
        assert!(is_asset_specifier("../banner.webp"));
        assert!(is_asset_specifier("./favicon.ico"));
        assert!(is_asset_specifier("./arrow.Svg"));
        assert!(!is_asset_specifier("./Widget"));
        assert!(!is_asset_specifier("./png"));
    }

    #[test]
    fn test_asset_directories() {
        assert!(is_asset_specifier("./assets/Logo"));
        assert!(is_asset_specifier("../images/hero"));
        assert!(is_asset_specifier("../../icons/Close"));
        assert!(!is_asset_specifier("./components/Icon"));
        assert!(!is_asset_specifier("./myassets/Logo"));
        // Only directory segments count, not the imported file itself.
        assert!(!is_asset_specifier("./icons"));
    }

    #[test]
    fn test_out_of_scope_combines_both_rules() {
        assert!(is_out_of_scope("./assets/Logo"));
        assert!(is_out_of_scope("./logo.png"));
        assert!(!is_out_of_scope("./Widget"));
        assert!(!is_out_of_scope("../Widget.tsx"));
    }

    #[test]
    fn test_checkable_file_types() {
        assert!(is_checkable_file_type(Path::new("/src/a.js")));
        assert!(is_checkable_file_type(Path::new("/src/a.jsx")));
        assert!(is_checkable_file_type(Path::new("/src/a.ts")));
        assert!(is_checkable_file_type(Path::new("/src/a.TSX")));
        assert!(!is_checkable_file_type(Path::new("/src/data.json")));
        assert!(!is_checkable_file_type(Path::new("/src/styles.css")));
        assert!(!is_checkable_file_type(Path::new("/src/a.mjs")));
        assert!(!is_checkable_file_type(Path::new("/src/Makefile")));
    }

    #[test]
    fn test_source_kind_from_extension() {
        assert_eq!(SourceKind::from_extension("tsx"), Some(SourceKind::Tsx));
        assert_eq!(SourceKind::from_extension("JS"), Some(SourceKind::JavaScript));
        assert_eq!(SourceKind::from_extension("css"), None);
    }
}
